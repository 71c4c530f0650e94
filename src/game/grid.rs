// src/game/grid.rs

//! Read-only 8x8 view of a board, the form the evaluator works on.
//!
//! Row 0 is rank 8 and column 0 is file a, so the grid reads the same way a
//! diagram is printed and the placement tables are written.

use shakmaty::{Board, Color, Piece, Square};
use std::fmt;

use crate::error::{EngineError, Result};

const EMPTY_CODE: u8 = b'.';

/// Exact board content, one piece code per square in row-major order.
///
/// The encoding is a bijection between grids and keys, so two different
/// boards never share a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardKey([u8; 64]);

impl BoardKey {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Option<Piece>; 8]; 8],
}

/// Grid coordinates of a square.
pub fn cell_of(square: Square) -> (usize, usize) {
    (7 - square.rank() as usize, square.file() as usize)
}

/// Decodes a single piece code (`PNBRQK` for White, `pnbrqk` for Black).
pub fn piece_from_code(code: char) -> Result<Piece> {
    Piece::from_char(code).ok_or(EngineError::UnknownPiece { code })
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_board(board: &Board) -> Self {
        let mut grid = Self::empty();
        for square in board.occupied() {
            let (row, col) = cell_of(square);
            grid.cells[row][col] = board.piece_at(square);
        }
        grid
    }

    /// Parses the piece placement field of a FEN (`rnbqkbnr/pppppppp/8/...`).
    pub fn from_placement(placement: &str) -> Result<Self> {
        let malformed = |reason: &str| EngineError::MalformedPlacement {
            placement: placement.to_string(),
            reason: reason.to_string(),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(malformed("expected 8 ranks"));
        }

        let mut grid = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0;
            for ch in text.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as usize;
                } else {
                    if col >= 8 {
                        return Err(malformed("rank overflows 8 files"));
                    }
                    grid.cells[row][col] = Some(piece_from_code(ch)?);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(malformed("rank does not cover 8 files"));
            }
        }
        Ok(grid)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        self.cells[row][col] = piece;
    }

    /// Iterates over occupied cells as `(row, col, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| (row, col, piece)))
        })
    }

    pub fn occupied(&self) -> usize {
        self.pieces().count()
    }

    pub fn key(&self) -> BoardKey {
        let mut key = [EMPTY_CODE; 64];
        for (row, col, piece) in self.pieces() {
            key[row * 8 + col] = piece.char() as u8;
        }
        BoardKey(key)
    }

    /// The board seen from the other side: ranks reversed and colours swapped.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::empty();
        for (row, col, piece) in self.pieces() {
            mirrored.cells[7 - row][col] = Some(Piece {
                color: !piece.color,
                role: piece.role,
            });
        }
        mirrored
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, _, piece)| piece.color == color).count()
    }

    /// FEN piece placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(piece.char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            let line: String = cells
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.char()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
