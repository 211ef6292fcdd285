//! Move value produced by the generator and consumed by search and the host.
//!
//! A move is just the origin, the destination and the kind of piece that moves.
//! Captures are implicit (the destination held an enemy piece) and there are no
//! special-move flags.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_kind: PieceKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece_kind: PieceKind) -> Self {
        Self {
            from,
            to,
            piece_kind,
        }
    }

    /// The `(from, to)` pair handed back to the host.
    #[inline]
    pub const fn squares(self) -> (Square, Square) {
        (self.from, self.to)
    }
}

/// Split long algebraic text such as `e2e4` into its two squares.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}
