//! Errors used throughout the chess core.
//!
//! `ChessErrors` is the single error type returned by board parsing, the host
//! facade and the console front-end. Each variant carries enough context to
//! print a precise diagnostic. Search and move generation are total over a
//! valid `BoardState` and never produce errors.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// FEN board field did not contain exactly seven `/` separators.
    #[error("FEN board field must contain 7 rank separators, found {0}")]
    InvalidFenSeparatorCount(usize),

    /// A FEN rank did not describe exactly eight files.
    ///
    /// Payload: (rank number 1..=8, files described so far)
    #[error("FEN rank {0} must describe exactly 8 files, found {1}")]
    InvalidFenRankWidth(u8, usize),

    /// Found a character that is neither a run length `1`-`8` nor a piece letter.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// The FEN string was empty or contained only whitespace.
    #[error("FEN string is empty")]
    EmptyFen,

    /// A board-state string was not exactly 64 characters long.
    #[error("board state must be 64 characters, got {0}")]
    InvalidStateLength(usize),

    /// A board-state string contained something other than `0` or a piece letter.
    ///
    /// Payload: (offending character, square index)
    #[error("invalid board state character '{0}' at square {1}")]
    InvalidStateChar(char, usize),

    /// A square index or column/row pair fell outside the board.
    #[error("square out of range: {0}")]
    SquareOutOfRange(usize),

    /// An algebraic square or move string failed to parse.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// Attempted to move from a square holding no piece.
    #[error("no piece on square {0}")]
    EmptySourceSquare(Square),

    /// Attempted to move a piece belonging to the side not on move.
    #[error("piece on square {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    /// The requested move is not in the pseudo-legal move list.
    #[error("move {0}{1} is not available in this position")]
    IllegalMove(String, String),
}

/// Result alias used by fallible core operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
