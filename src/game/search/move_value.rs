//! One-ply move priority used only to order root moves.

use crate::constants::{CHECKMATE_PRIORITY, DRAW_PRIORITY};
use crate::game::evaluation;
use crate::game::grid::cell_of;
use crate::game::rules::Rules;
use crate::game::search::SearchConfig;

/// Scores `mv` by what it leads to: mate first, draws last, checks and captures in between.
///
/// The move is applied to inspect the resulting status and undone before returning.
pub fn move_value<R: Rules>(rules: &mut R, mv: &R::Move, config: &SearchConfig) -> f64 {
    let captured = rules.captured(mv);

    let mut value = {
        let after = rules.play(mv);
        if after.is_checkmate() {
            return CHECKMATE_PRIORITY;
        }
        if after.is_draw() {
            return DRAW_PRIORITY;
        }
        if after.is_check() {
            config.check_bonus
        } else {
            0.0
        }
    };

    if let Some((piece, square)) = captured {
        let (row, col) = cell_of(square);
        value += evaluation::absolute_value(piece, row, col);
    }
    value
}
