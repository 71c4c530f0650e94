//! Static evaluation of a board: material plus placement tables.

pub mod pst;

use shakmaty::{Color, Piece, Role};

use crate::constants::{
    BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
use crate::game::grid::Grid;
use crate::game::search::SearchConfig;

pub fn get_piece_value(role: Role) -> f64 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

/// Material plus placement bonus of `piece` standing on `(row, col)`, regardless of colour.
pub fn absolute_value(piece: Piece, row: usize, col: usize) -> f64 {
    get_piece_value(piece.role) + pst::table(piece.color, piece.role)[row][col]
}

/// Contribution of one square: positive for White pieces, negative for Black.
pub fn square_value(piece: Option<Piece>, row: usize, col: usize) -> f64 {
    match piece {
        None => 0.0,
        Some(piece) => {
            let value = absolute_value(piece, row, col);
            if piece.color == Color::White {
                value
            } else {
                -value
            }
        }
    }
}

fn is_endgame(grid: &Grid, config: &SearchConfig) -> bool {
    grid.occupied() <= config.endgame_piece_limit
}

/// Placeholder for endgame scoring, which is not implemented. Always neutral.
fn evaluate_endgame(_grid: &Grid) -> f64 {
    0.0
}

/// Evaluates the board from White's perspective.
pub fn evaluate(grid: &Grid, config: &SearchConfig) -> f64 {
    if is_endgame(grid, config) {
        return evaluate_endgame(grid);
    }

    let mut total = 0.0;
    for row in 0..8 {
        for col in 0..8 {
            total += square_value(grid.get(row, col), row, col);
        }
    }
    total
}
