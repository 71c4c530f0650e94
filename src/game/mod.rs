// game/mod.rs

pub mod evaluation;
pub mod grid;
pub mod rules;
pub mod search;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Square};

use crate::error::{EngineError, Result};
use grid::Grid;
use rules::Rules;

/// A shakmaty position with an undo stack.
#[derive(Clone, Debug)]
pub struct ChessGame {
    chess: Chess,
    history: Vec<Chess>,
    hashes: Vec<Zobrist64>,
}

fn position_hash(pos: &Chess) -> Zobrist64 {
    pos.zobrist_hash(EnPassantMode::Legal)
}

impl ChessGame {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(chess: Chess) -> Self {
        let hashes = vec![position_hash(&chess)];
        Self {
            chess,
            history: Vec::new(),
            hashes,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.parse().map_err(|e| invalid(format!("{e}")))?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_position(chess))
    }

    pub fn position(&self) -> &Chess {
        &self.chess
    }

    /// Number of moves applied since construction.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn san(&self, mv: &Move) -> String {
        San::from_move(&self.chess, *mv).to_string()
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = position_hash(&self.chess);
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for ChessGame {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.chess.legal_moves().to_vec()
    }

    fn apply(&mut self, mv: &Move) {
        self.history.push(self.chess.clone());
        self.chess.play_unchecked(*mv);
        self.hashes.push(position_hash(&self.chess));
    }

    fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.chess = previous;
            self.hashes.pop();
        }
    }

    fn turn(&self) -> Color {
        self.chess.turn()
    }

    fn is_check(&self) -> bool {
        self.chess.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.chess.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.chess.is_stalemate()
            || self.chess.is_insufficient_material()
            || self.chess.halfmoves() >= 100
            || self.is_threefold_repetition()
    }

    fn grid(&self) -> Result<Grid> {
        Ok(Grid::from_board(self.chess.board()))
    }

    fn captured(&self, mv: &Move) -> Option<(Piece, Square)> {
        mv.capture().map(|role| {
            (
                Piece {
                    color: !self.chess.turn(),
                    role,
                },
                mv.to(),
            )
        })
    }

    fn move_key(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    fn parse_move(&self, key: &str) -> Option<Move> {
        let uci: UciMove = key.parse().ok()?;
        uci.to_move(&self.chess).ok()
    }

    fn to_fen(&self) -> String {
        Fen::from_position(&self.chess, EnPassantMode::Legal).to_string()
    }
}
