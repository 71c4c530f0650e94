// src/game/search.rs

pub mod alpha_beta;
pub mod book;
pub mod evaluation_cache;
pub mod killer;
pub mod move_value;

use serde::{Deserialize, Serialize};
use shakmaty::Color;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::constants::{
    CHECK_BONUS, DECISIVE_THRESHOLD, DEFAULT_SEARCH_DEPTH, ENDGAME_PIECE_LIMIT,
};
use crate::error::Result;
use crate::game::evaluation;
use crate::game::grid::Grid;
use crate::game::rules::Rules;
use evaluation_cache::EvaluationCache;
use killer::KillerTable;
use move_value::move_value;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub search_depth: u8,
    pub use_killer_moves: bool,
    pub use_move_value_ordering: bool,
    pub use_opening_book: bool,
    pub use_decisive_shortcut: bool,
    pub decisive_threshold: f64,
    pub endgame_piece_limit: usize,
    pub check_bonus: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            use_killer_moves: true,
            use_move_value_ordering: true,
            use_opening_book: true,
            use_decisive_shortcut: false,
            decisive_threshold: DECISIVE_THRESHOLD,
            endgame_piece_limit: ENDGAME_PIECE_LIMIT,
            check_bonus: CHECK_BONUS,
        }
    }
}

/// Where the last chosen move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveSource {
    #[default]
    None,
    Book,
    Shortcut,
    Search,
}

/// Diagnostics of the most recent `best_move` call.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed: Duration,
    pub best_value: Option<f64>,
    pub source: MoveSource,
}

impl SearchStats {
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}

/// One search session: configuration plus the tables that persist between moves.
pub struct Engine {
    config: SearchConfig,
    killers: KillerTable,
    evaluation_cache: EvaluationCache,
    stats: SearchStats,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            killers: KillerTable::new(),
            evaluation_cache: EvaluationCache::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn killers(&self) -> &KillerTable {
        &self.killers
    }

    pub fn evaluation_cache(&self) -> &EvaluationCache {
        &self.evaluation_cache
    }

    /// Forgets killer history so a new game starts without bias from the last one.
    pub fn new_game(&mut self) {
        self.killers.clear();
        self.stats = SearchStats::default();
    }

    /// Picks a move for the side to move, or `None` if it has no legal move.
    ///
    /// The position is left exactly as it was given.
    pub fn best_move<R: Rules>(&mut self, rules: &mut R) -> Result<Option<R::Move>> {
        self.stats = SearchStats::default();
        let start = Instant::now();
        let result = self.pick(rules);
        self.stats.elapsed = start.elapsed();

        info!(
            nodes = self.stats.nodes,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            nps = self.stats.nodes_per_second() as u64,
            source = ?self.stats.source,
            value = ?self.stats.best_value,
            "search finished"
        );
        result
    }

    fn pick<R: Rules>(&mut self, rules: &mut R) -> Result<Option<R::Move>> {
        if self.config.use_opening_book {
            if let Some(mv) = self.book_move(rules)? {
                self.stats.source = MoveSource::Book;
                return Ok(Some(mv));
            }
        }

        if self.config.use_decisive_shortcut {
            if let Some(mv) = self.decisive_move(rules)? {
                self.stats.source = MoveSource::Shortcut;
                return Ok(Some(mv));
            }
        }

        let depth = self.config.search_depth.max(1);
        let (best, value) = self.search_root(rules, depth)?;
        if best.is_some() {
            self.stats.source = MoveSource::Search;
            self.stats.best_value = Some(value);
        } else {
            warn!(fen = %rules.to_fen(), "no legal move to search");
        }
        Ok(best)
    }

    fn book_move<R: Rules>(&self, rules: &R) -> Result<Option<R::Move>> {
        let key = book::book_key(&rules.grid()?, rules.turn());
        let Some(reply) = book::probe(&key) else {
            return Ok(None);
        };
        let mv = rules.parse_move(reply);
        if mv.is_some() {
            debug!(%key, reply, "book move");
        }
        Ok(mv)
    }

    /// Returns the first move whose one-reply search already reaches the decisive threshold.
    fn decisive_move<R: Rules>(&mut self, rules: &mut R) -> Result<Option<R::Move>> {
        let perspective = rules.turn();
        for mv in rules.legal_moves() {
            let value = {
                let mut after = rules.play(&mv);
                self.alpha_beta(
                    &mut *after,
                    1,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    false,
                    perspective,
                )?
            };
            if value >= self.config.decisive_threshold {
                debug!(mv = %rules.move_key(&mv), value, "decisive move");
                self.stats.best_value = Some(value);
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }

    /// Orders the root moves, searches each one and updates the killer table.
    pub(crate) fn search_root<R: Rules>(
        &mut self,
        rules: &mut R,
        depth: u8,
    ) -> Result<(Option<R::Move>, f64)> {
        let perspective = rules.turn();
        let moves = self.order_root_moves(rules, depth);
        let mut discarded: HashSet<String> = if self.config.use_killer_moves {
            self.killers.discarded(depth)
        } else {
            HashSet::new()
        };

        let mut best_value = f64::NEG_INFINITY;
        let mut best: Option<R::Move> = None;

        for (mv, key) in moves {
            let value = {
                let mut after = rules.play(&mv);
                self.alpha_beta(
                    &mut *after,
                    depth - 1,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    false,
                    perspective,
                )?
            };

            // Later moves win ties.
            let is_best = value >= best_value;
            if is_best {
                best_value = value;
                best = Some(mv);
            }

            if self.config.use_killer_moves {
                self.killers.reward(depth, &key);
                if !is_best {
                    self.killers.punish(depth, &key);
                    discarded.insert(key.clone());
                }
            }

            debug!(
                mv = %key,
                value,
                killer = ?self.killers.score(depth, &key),
                "root move searched"
            );
        }

        debug!(depth, discarded = discarded.len(), "root pass complete");
        Ok((best, best_value))
    }

    /// Root order: moves with a positive killer record by score, then the move value
    /// heuristic; discarded moves go last, keeping their generation order.
    fn order_root_moves<R: Rules>(&self, rules: &mut R, depth: u8) -> Vec<(R::Move, String)> {
        let discarded = if self.config.use_killer_moves {
            self.killers.discarded(depth)
        } else {
            HashSet::new()
        };

        let mut scored: Vec<(R::Move, String, bool, i32, f64)> = Vec::new();
        for mv in rules.legal_moves() {
            let key = rules.move_key(&mv);
            let is_discarded = discarded.contains(&key);
            let killer = if self.config.use_killer_moves && !is_discarded {
                self.killers.score(depth, &key).unwrap_or(0)
            } else {
                0
            };
            let value = if self.config.use_move_value_ordering && !is_discarded {
                move_value(rules, &mv, &self.config)
            } else {
                0.0
            };
            scored.push((mv, key, is_discarded, killer, value));
        }

        scored.sort_by(|a, b| {
            a.2.cmp(&b.2)
                .then_with(|| b.3.cmp(&a.3))
                .then_with(|| b.4.total_cmp(&a.4))
        });

        scored
            .into_iter()
            .map(|(mv, key, _, _, _)| (mv, key))
            .collect()
    }

    fn evaluate_with_cache(&mut self, grid: &Grid) -> f64 {
        let key = grid.key();
        if let Some(score) = self.evaluation_cache.probe(&key) {
            return score;
        }

        let score = evaluation::evaluate(grid, &self.config);
        self.evaluation_cache.store(key, score);
        score
    }

    /// Static score of the current position seen from `perspective`.
    pub(crate) fn leaf_score<R: Rules>(&mut self, rules: &R, perspective: Color) -> Result<f64> {
        let score = self.evaluate_with_cache(&rules.grid()?);
        Ok(match perspective {
            Color::White => score,
            Color::Black => -score,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
