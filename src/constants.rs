// --- Piece values ---
pub const PAWN_VALUE: f64 = 10.0;
pub const KNIGHT_VALUE: f64 = 30.0;
pub const BISHOP_VALUE: f64 = 30.0;
pub const ROOK_VALUE: f64 = 50.0;
pub const QUEEN_VALUE: f64 = 90.0;
pub const KING_VALUE: f64 = 900.0;

// Endgame detection: at or below this many occupied squares the endgame evaluator takes over.
pub const ENDGAME_PIECE_LIMIT: usize = 6;

// Move ordering priorities
pub const CHECKMATE_PRIORITY: f64 = 10_000.0;
pub const DRAW_PRIORITY: f64 = -100_000.0;
pub const CHECK_BONUS: f64 = 10.0;

// Search
pub const MATE_SCORE: f64 = 10_000.0;
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
pub const DECISIVE_THRESHOLD: f64 = 1000.0;
