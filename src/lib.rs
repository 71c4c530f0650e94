//! Fixed-depth alpha-beta chess search with killer-move root ordering,
//! piece-square evaluation and an opening shortcut, on top of `shakmaty`.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;

pub use error::{EngineError, Result};
pub use game::grid::{BoardKey, Grid};
pub use game::rules::{Applied, Rules};
pub use game::search::{Engine, MoveSource, SearchConfig, SearchStats};
pub use game::ChessGame;
