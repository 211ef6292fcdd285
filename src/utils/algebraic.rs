//! Square conversions for algebraic and host coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`), internal square
//! indices, and the host's column/row pairs whose rows count down from rank 8.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    format!("{file_char}{rank_char}")
}

/// Host coordinates to square index: `file = column`, `rank = 7 - row`.
#[inline]
pub fn column_row_to_square(column: u8, row: u8) -> ChessResult<Square> {
    if column > 7 || row > 7 {
        return Err(ChessErrors::SquareOutOfRange(
            usize::from(row) * 8 + usize::from(column),
        ));
    }
    Ok((7 - row) * 8 + column)
}

/// Square index to host `(column, row)`.
#[inline]
pub fn square_to_column_row(square: Square) -> ChessResult<(u8, u8)> {
    if square > 63 {
        return Err(ChessErrors::SquareOutOfRange(usize::from(square)));
    }
    Ok((square % 8, 7 - square / 8))
}
