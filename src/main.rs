use std::path::PathBuf;

use clap::Parser;
use killer_minimax::config;
use killer_minimax::{ChessGame, Engine, Rules, SearchConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position in FEN; defaults to the standard start
    #[arg(long)]
    fen: Option<String>,

    /// Search depth in plies, overriding the profile
    #[arg(long)]
    depth: Option<u8>,

    /// Name of a saved search profile to load
    #[arg(long)]
    profile: Option<String>,

    /// Directory holding search profiles
    #[arg(long, default_value = config::PROFILES_DIR)]
    profiles_dir: PathBuf,

    /// Save the effective configuration under this profile name
    #[arg(long)]
    save_profile: Option<String>,

    /// Number of plies to self-play
    #[arg(long, default_value_t = 1)]
    plies: usize,

    /// Skip the opening shortcut
    #[arg(long)]
    no_book: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    let args = Args::parse();

    let mut search_config = match &args.profile {
        Some(name) => config::load_profile(&args.profiles_dir, name)?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = args.depth {
        search_config.search_depth = depth;
    }
    if args.no_book {
        search_config.use_opening_book = false;
    }
    if let Some(name) = &args.save_profile {
        config::save_profile(&args.profiles_dir, name, &search_config)?;
        info!(name = %name, dir = %args.profiles_dir.display(), "profile saved");
    }

    let mut game = match &args.fen {
        Some(fen) => ChessGame::from_fen(fen)?,
        None => ChessGame::new(),
    };
    let mut engine = Engine::new(search_config);

    println!("{}", game.grid()?);
    for _ in 0..args.plies {
        if game.is_game_over() {
            info!(fen = %game.to_fen(), "game over");
            break;
        }
        let Some(mv) = engine.best_move(&mut game)? else {
            warn!("engine returned no move");
            break;
        };

        let stats = engine.stats();
        let value = stats
            .best_value
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));
        println!(
            "{:>3}. {:<8} source={:?} value={} nodes={} time={}ms nps={:.0}",
            game.ply() + 1,
            game.san(&mv),
            stats.source,
            value,
            stats.nodes,
            stats.elapsed.as_millis(),
            stats.nodes_per_second(),
        );
        game.apply(&mv);
    }
    println!("{}", game.grid()?);
    println!("{}", game.to_fen());

    Ok(())
}
