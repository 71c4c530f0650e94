// src/config.rs

use crate::error::Result;
use crate::game::search::SearchConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROFILES_DIR: &str = "profiles";

fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

/// Writes `config` as pretty JSON to `<dir>/<name>.json`, creating `dir` if needed.
pub fn save_profile(dir: &Path, name: &str, config: &SearchConfig) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = profile_path(dir, name);
    let json = serde_json::to_string_pretty(config)?;
    fs::File::create(&path)?.write_all(json.as_bytes())?;
    debug!(path = %path.display(), "profile saved");
    Ok(())
}

/// Missing fields fall back to their defaults.
pub fn load_profile(dir: &Path, name: &str) -> Result<SearchConfig> {
    let json = fs::read_to_string(profile_path(dir, name))?;
    Ok(serde_json::from_str(&json)?)
}

pub fn get_profiles(dir: &Path) -> Result<Vec<String>> {
    let mut profiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem() {
                if let Some(name) = stem.to_str() {
                    profiles.push(name.to_string());
                }
            }
        }
    }
    profiles.sort();
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig {
            search_depth: 5,
            use_killer_moves: false,
            decisive_threshold: 500.0,
            ..SearchConfig::default()
        };
        save_profile(dir.path(), "deep", &config).unwrap();
        assert_eq!(load_profile(dir.path(), "deep").unwrap(), config);
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("quick.json"), r#"{ "search_depth": 1 }"#).unwrap();
        let config = load_profile(dir.path(), "quick").unwrap();
        assert_eq!(config.search_depth, 1);
        assert_eq!(
            config,
            SearchConfig {
                search_depth: 1,
                ..SearchConfig::default()
            }
        );
    }

    #[test]
    fn test_get_profiles_lists_json_stems() {
        let dir = tempfile::tempdir().unwrap();
        save_profile(dir.path(), "b", &SearchConfig::default()).unwrap();
        save_profile(dir.path(), "a", &SearchConfig::default()).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        assert_eq!(get_profiles(dir.path()).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("profiles");
        save_profile(&nested, "default", &SearchConfig::default()).unwrap();
        assert!(nested.join("default.json").is_file());
    }

    #[test]
    fn test_missing_and_broken_profiles() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_profile(dir.path(), "absent"),
            Err(EngineError::Io(_))
        ));
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        assert!(matches!(
            load_profile(dir.path(), "broken"),
            Err(EngineError::Json(_))
        ));
    }
}
