//! Canonical chess-rule constants.
//!
//! Static literals used to initialize game state and to drive search defaults.

/// Standard chess starting position, board field of Forsyth-Edwards Notation.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Root search depth used when the caller does not ask for one.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;
