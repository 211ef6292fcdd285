//! FEN board-field parser.
//!
//! Builds a `BoardState` from the placement field of Forsyth-Edwards Notation.
//! The whole field is validated into a fresh board before anything is returned,
//! so a rejected field never leaves a half-filled board behind.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

/// Parse a FEN string. Only the first whitespace-separated field (piece
/// placement) is read; side to move, castling, en passant and clocks are
/// ignored when present.
pub fn parse_fen(fen: &str) -> ChessResult<BoardState> {
    let board_part = fen.split_whitespace().next().ok_or(ChessErrors::EmptyFen)?;
    parse_board_field(board_part)
}

/// Parse exactly one FEN board field: 8 ranks, rank 8 first, separated by `/`.
pub fn parse_board_field(board_part: &str) -> ChessResult<BoardState> {
    let separators = board_part.bytes().filter(|&b| b == b'/').count();
    if separators != 7 {
        return Err(ChessErrors::InvalidFenSeparatorCount(separators));
    }

    let mut board = BoardState::empty();

    for (fen_rank_idx, rank_str) in board_part.split('/').enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let rank_number = board_rank + 1;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10).filter(|run| (1..=8).contains(run)) {
                file += run as usize;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenRankWidth(rank_number, file));
                }
                continue;
            }

            let piece = u8::try_from(ch)
                .ok()
                .and_then(PieceInfo::from_cell)
                .ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenRankWidth(rank_number, file + 1));
            }

            board.set_piece(board_rank * 8 + file as u8, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenRankWidth(rank_number, file));
        }
    }

    Ok(board)
}
