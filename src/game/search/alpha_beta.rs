//! Fixed-depth minimax with alpha-beta pruning.

use shakmaty::Color;

use crate::constants::MATE_SCORE;
use crate::error::Result;
use crate::game::rules::Rules;
use crate::game::search::Engine;

/// Score of a finished game seen from `perspective`, or `None` while play goes on.
///
/// Mates found with more depth left are closer to the root and score higher.
pub(crate) fn terminal_score<R: Rules>(rules: &R, depth: u8, perspective: Color) -> Option<f64> {
    if rules.is_checkmate() {
        let mate = MATE_SCORE + f64::from(depth);
        return Some(if rules.turn() == perspective { -mate } else { mate });
    }
    if rules.is_draw() {
        return Some(0.0);
    }
    None
}

impl Engine {
    /// Searches `depth` plies below the current position.
    ///
    /// Maximizing nodes belong to `perspective`, the side that moved at the root.
    pub(crate) fn alpha_beta<R: Rules>(
        &mut self,
        rules: &mut R,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        perspective: Color,
    ) -> Result<f64> {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(rules, depth, perspective) {
            return Ok(score);
        }
        if depth == 0 {
            return self.leaf_score(rules, perspective);
        }

        let moves = rules.legal_moves();

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                let value = {
                    let mut after = rules.play(mv);
                    self.alpha_beta(&mut *after, depth - 1, alpha, beta, false, perspective)?
                };
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    return Ok(best);
                }
            }
            Ok(best)
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                let value = {
                    let mut after = rules.play(mv);
                    self.alpha_beta(&mut *after, depth - 1, alpha, beta, true, perspective)?
                };
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    return Ok(best);
                }
            }
            Ok(best)
        }
    }
}
