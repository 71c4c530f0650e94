//! Piece-Square Tables (PSTs) for the placement part of the evaluation.
//!
//! Tables are written from White's point of view with row 0 = rank 8, the way
//! a diagram is printed. Black tables are the White ones with the ranks
//! reversed.

use shakmaty::{Color, Role};

pub type Pst = [[f64; 8]; 8];

const fn flip(pst: &Pst) -> Pst {
    let mut flipped = [[0.0; 8]; 8];
    let mut i = 0;
    while i < 8 {
        let mut j = 0;
        while j < 8 {
            flipped[i][j] = pst[7 - i][j];
            j += 1;
        }
        i += 1;
    }
    flipped
}

#[rustfmt::skip]
const PAWN_PST: Pst = [
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
    [5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0, 5.0],
    [1.0,  1.0,  2.0,  2.5,  3.0,  2.0,  1.0, 1.0],
    [0.5,  0.5,  1.0,  2.0,  2.5,  1.0,  0.5, 0.5],
    [0.0,  0.0,  0.0,  2.0,  2.5,  0.0,  0.0, 0.0],
    [0.5, -0.5, -1.0,  0.0,  0.0, -1.0, -0.5, 0.5],
    [0.5,  1.0,  1.0, -2.5, -2.5,  1.0,  1.0, 0.5],
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
];

#[rustfmt::skip]
const KNIGHT_PST: Pst = [
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
    [-4.0, -2.0,  0.0,  0.5,  0.5,  0.0, -2.0, -4.0],
    [-3.0,  0.5,  1.0,  1.5,  1.5,  1.0,  0.5, -3.0],
    [-3.0,  0.0,  1.5,  2.0,  2.0,  1.5,  0.0, -3.0],
    [-3.0,  0.5,  1.5,  2.0,  2.0,  1.5,  0.5, -3.0],
    [-3.0,  0.0,  1.0,  1.5,  1.5,  1.0,  0.0, -3.0],
    [-4.0, -2.0,  0.0,  0.0,  0.0,  0.0, -2.0, -4.0],
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
];

#[rustfmt::skip]
const BISHOP_PST: Pst = [
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  1.0,  1.0,  0.5,  0.0, -1.0],
    [-1.0,  0.5,  0.5,  1.0,  1.0,  0.5,  0.5, -1.0],
    [-1.0,  0.0,  1.0,  1.0,  1.0,  1.0,  0.0, -1.0],
    [-1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0, -1.0],
    [-1.0,  0.5,  0.0,  0.0,  0.0,  0.0,  0.5, -1.0],
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const ROOK_PST: Pst = [
    [ 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,  0.0],
    [ 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,  0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [ 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0,  0.0],
];

#[rustfmt::skip]
const QUEEN_PST: Pst = [
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-0.5,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [ 0.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [-1.0,  0.5,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const KING_PST: Pst = [
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-2.0, -3.0, -3.0, -4.0, -4.0, -3.0, -3.0, -2.0],
    [-1.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0],
    [ 2.0,  2.0,  0.0,  0.0,  0.0,  0.0,  2.0,  2.0],
    [ 2.0,  3.0,  1.0,  0.0,  0.0,  1.0,  3.0,  2.0],
];

// Flipped PSTs for black pieces
const BLACK_PAWN_PST: Pst = flip(&PAWN_PST);
const BLACK_KNIGHT_PST: Pst = flip(&KNIGHT_PST);
const BLACK_BISHOP_PST: Pst = flip(&BISHOP_PST);
const BLACK_ROOK_PST: Pst = flip(&ROOK_PST);
const BLACK_QUEEN_PST: Pst = flip(&QUEEN_PST);
const BLACK_KING_PST: Pst = flip(&KING_PST);

pub fn table(color: Color, role: Role) -> &'static Pst {
    match (color, role) {
        (Color::White, Role::Pawn) => &PAWN_PST,
        (Color::White, Role::Knight) => &KNIGHT_PST,
        (Color::White, Role::Bishop) => &BISHOP_PST,
        (Color::White, Role::Rook) => &ROOK_PST,
        (Color::White, Role::Queen) => &QUEEN_PST,
        (Color::White, Role::King) => &KING_PST,
        (Color::Black, Role::Pawn) => &BLACK_PAWN_PST,
        (Color::Black, Role::Knight) => &BLACK_KNIGHT_PST,
        (Color::Black, Role::Bishop) => &BLACK_BISHOP_PST,
        (Color::Black, Role::Rook) => &BLACK_ROOK_PST,
        (Color::Black, Role::Queen) => &BLACK_QUEEN_PST,
        (Color::Black, Role::King) => &BLACK_KING_PST,
    }
}
