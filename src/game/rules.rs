// src/game/rules.rs

//! The interface the search core needs from a rules engine.

use shakmaty::{Color, Piece, Square};
use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::game::grid::Grid;

/// A mutable position with legal move generation and strict LIFO apply/undo.
pub trait Rules {
    type Move: Clone;

    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: &Self::Move);

    /// Takes back the most recently applied move.
    fn undo(&mut self);

    fn turn(&self) -> Color;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    fn grid(&self) -> Result<Grid>;

    /// The piece `mv` would take and the move's destination square.
    fn captured(&self, mv: &Self::Move) -> Option<(Piece, Square)>;

    /// Stable textual identity of a move, used as a table key.
    fn move_key(&self, mv: &Self::Move) -> String;

    /// Resolves a key produced by [`Rules::move_key`] to a legal move here.
    fn parse_move(&self, key: &str) -> Option<Self::Move>;

    fn to_fen(&self) -> String;

    /// Applies `mv` until the returned guard is dropped.
    fn play(&mut self, mv: &Self::Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        self.apply(mv);
        Applied { rules: self }
    }
}

/// A move that is undone when this guard goes out of scope.
pub struct Applied<'a, R: Rules> {
    rules: &'a mut R,
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.rules.undo();
    }
}
