// src/game/search/evaluation_cache.rs

use std::collections::HashMap;

use crate::game::grid::BoardKey;

/// Memoized static evaluations keyed by exact board content.
#[derive(Clone, Debug, Default)]
pub struct EvaluationCache {
    table: HashMap<BoardKey, f64>,
    hits: u64,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&mut self, key: &BoardKey) -> Option<f64> {
        let score = self.table.get(key).copied();
        if score.is_some() {
            self.hits += 1;
        }
        score
    }

    pub fn store(&mut self, key: BoardKey, score: f64) {
        self.table.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }
}
