//! Killer-move bookkeeping for root move ordering.
//!
//! Each root depth keeps a score per move key. A move gains a point every
//! time it is tried at that depth and loses one when it finishes strictly
//! below the best move of that pass. Scores at or below zero mark a move as
//! discarded for the next ordering at the same depth.

use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct KillerTable {
    depths: HashMap<u8, HashMap<String, i32>>,
}

impl KillerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, depth: u8, key: &str) -> Option<i32> {
        self.depths.get(&depth)?.get(key).copied()
    }

    pub fn reward(&mut self, depth: u8, key: &str) {
        *self.entry(depth, key) += 1;
    }

    pub fn punish(&mut self, depth: u8, key: &str) {
        *self.entry(depth, key) -= 1;
    }

    /// Keys recorded at `depth` whose score is no longer positive.
    pub fn discarded(&self, depth: u8) -> HashSet<String> {
        self.depths
            .get(&depth)
            .map(|moves| {
                moves
                    .iter()
                    .filter(|(_, &score)| score <= 0)
                    .map(|(key, _)| key.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.depths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.depths.values().all(HashMap::is_empty)
    }

    fn entry(&mut self, depth: u8, key: &str) -> &mut i32 {
        self.depths
            .entry(depth)
            .or_default()
            .entry(key.to_string())
            .or_insert(0)
    }
}
