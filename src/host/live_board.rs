//! Boundary with the host's live board.
//!
//! The host addresses squares by `(column, row)` with row 0 at the top (rank 8)
//! and describes pieces either as decoded `PieceInfo` or as packed game tags.
//! Everything crossing this boundary is converted once, here.

use crate::game_state::chess_types::*;
use crate::search::negamax::search;

/// Read-only view of a board in host coordinates.
pub trait LiveBoard {
    /// Piece on `(column, row)`, or `None` when the square is empty.
    fn piece_at(&self, column: u8, row: u8) -> Option<PieceInfo>;
}

impl LiveBoard for BoardState {
    fn piece_at(&self, column: u8, row: u8) -> Option<PieceInfo> {
        if column > 7 || row > 7 {
            return None;
        }
        BoardState::piece_at(self, (7 - row) * 8 + column)
    }
}

/// Host grid of packed piece tags, indexed `[row][column]`. Tag 0 is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagGrid {
    pub tags: [[u16; 8]; 8],
}

impl TagGrid {
    /// Tags for every square of `board`, in host orientation.
    pub fn from_board(board: &BoardState) -> Self {
        let mut tags = [[0u16; 8]; 8];
        for (row, line) in tags.iter_mut().enumerate() {
            for (column, tag) in line.iter_mut().enumerate() {
                if let Some(piece) = LiveBoard::piece_at(board, column as u8, row as u8) {
                    *tag = piece.to_game_tag();
                }
            }
        }
        Self { tags }
    }
}

impl LiveBoard for TagGrid {
    fn piece_at(&self, column: u8, row: u8) -> Option<PieceInfo> {
        let tag = *self.tags.get(row as usize)?.get(column as usize)?;
        PieceInfo::from_game_tag(tag)
    }
}

impl BoardState {
    /// Snapshot a live board into internal square order (`rank = 7 - row`,
    /// `file = column`).
    pub fn from_live_board(live: &impl LiveBoard) -> Self {
        let mut board = BoardState::empty();
        for row in 0..8u8 {
            for column in 0..8u8 {
                let square = (7 - row) * 8 + column;
                board.set_piece(square, live.piece_at(column, row));
            }
        }
        board
    }
}

/// Search the live position for `side` and return the chosen `(from, to)`.
///
/// `None` means the side to move has no pseudo-legal moves.
pub fn choose_move_from_live_board(
    live: &impl LiveBoard,
    side: Color,
    depth: u8,
) -> Option<(Square, Square)> {
    let board = BoardState::from_live_board(live);
    search(&board, depth, side).best_move.map(|mv| mv.squares())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_round_trips_through_host_view() {
        let board = BoardState::new_game().expect("starting position should parse");
        assert_eq!(BoardState::from_live_board(&board), board);

        // Host row 0 is rank 8.
        assert_eq!(
            LiveBoard::piece_at(&board, 4, 0),
            Some(PieceInfo::new(PieceKind::King, Color::Dark))
        );
        assert_eq!(
            LiveBoard::piece_at(&board, 3, 7),
            Some(PieceInfo::new(PieceKind::Queen, Color::Light))
        );
        assert_eq!(LiveBoard::piece_at(&board, 8, 0), None);
    }

    #[test]
    fn tag_grid_decodes_host_tags() {
        let mut grid = TagGrid::default();
        grid.tags[7][0] = 4; // white rook on a1
        grid.tags[0][7] = 6 + DARK_TAG_OFFSET; // black king on h8
        grid.tags[3][3] = 99; // unknown tags read as empty

        let board = BoardState::from_live_board(&grid);
        assert_eq!(board.piece_at(0), Some(PieceInfo::new(PieceKind::Rook, Color::Light)));
        assert_eq!(board.piece_at(63), Some(PieceInfo::new(PieceKind::King, Color::Dark)));
        assert_eq!(board.count_pieces(), 2);
    }

    #[test]
    fn tag_grid_and_board_are_inverse() {
        let board = BoardState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R")
            .expect("FEN should parse");
        let grid = TagGrid::from_board(&board);
        assert_eq!(BoardState::from_live_board(&grid), board);
    }

    #[test]
    fn chooses_host_move_for_player_index() {
        let board = BoardState::from_fen("q3k3/8/8/8/8/8/8/R3K3").expect("FEN should parse");
        let grid = TagGrid::from_board(&board);
        assert_eq!(
            choose_move_from_live_board(&grid, Color::from_player_index(0), 2),
            Some((0, 56))
        );
        assert_eq!(
            choose_move_from_live_board(&TagGrid::default(), Color::Light, 2),
            None
        );
    }
}
