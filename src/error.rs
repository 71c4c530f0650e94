//! Error types for the engine.

/// Errors that can occur while reading positions, scoring them or loading profiles.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A board cell held a piece code that is not one of the six piece kinds.
    #[error("Unknown piece type: {code:?}")]
    UnknownPiece { code: char },

    /// A board placement string did not describe an 8x8 board.
    #[error("Malformed board placement {placement:?}: {reason}")]
    MalformedPlacement { placement: String, reason: String },

    /// The FEN could not be parsed or describes an illegal position.
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
