//! 64-cell board representation.
//!
//! `BoardState` is the central model of the core: one byte per square holding
//! `0` for empty or a FEN piece letter. It carries no side flags, rights or
//! clocks, so a move is fully described by the two cells it touches and undone
//! by restoring them.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_state_string;
use crate::utils::fen_parser::parse_fen;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [u8; 64],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [EMPTY_CELL; 64],
        }
    }

    pub fn new_game() -> ChessResult<Self> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Replace this board with the position in `fen`.
    ///
    /// The whole field is validated first; on error `self` is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        *self = parse_fen(fen)?;
        Ok(())
    }

    /// Parse the 64-character state string (square-index order).
    pub fn from_state_string(state: &str) -> ChessResult<Self> {
        let bytes = state.as_bytes();
        if bytes.len() != 64 {
            return Err(ChessErrors::InvalidStateLength(bytes.len()));
        }

        let mut cells = [EMPTY_CELL; 64];
        for (square, &byte) in bytes.iter().enumerate() {
            if byte != EMPTY_CELL && PieceInfo::from_cell(byte).is_none() {
                return Err(ChessErrors::InvalidStateChar(char::from(byte), square));
            }
            cells[square] = byte;
        }

        Ok(Self { cells })
    }

    #[inline]
    pub fn to_state_string(&self) -> String {
        generate_state_string(self)
    }

    #[inline]
    pub fn cells(&self) -> &[u8; 64] {
        &self.cells
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceInfo> {
        PieceInfo::from_cell(self.cells[square as usize])
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<PieceInfo>) {
        self.cells[square as usize] = piece.map_or(EMPTY_CELL, PieceInfo::to_cell);
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.cells[square as usize] == EMPTY_CELL
    }

    pub fn clear(&mut self) {
        self.cells = [EMPTY_CELL; 64];
    }

    /// Occupancy of both colors.
    pub fn occupancy(&self) -> Bitboard {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY_CELL)
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    pub fn occupancy_by_color(&self, color: Color) -> Bitboard {
        let mut occ = 0u64;
        for (sq, &cell) in self.cells.iter().enumerate() {
            if let Some(piece) = PieceInfo::from_cell(cell) {
                if piece.color == color {
                    occ |= 1u64 << sq;
                }
            }
        }
        occ
    }

    pub fn count_pieces(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY_CELL).count()
    }

    /// Apply `mv` in place and hand back a guard that restores both touched
    /// cells when dropped.
    pub fn make_move(&mut self, mv: Move) -> ReversibleEdit<'_> {
        let undo = UndoState {
            mv,
            prev_from: self.cells[mv.from as usize],
            prev_to: self.cells[mv.to as usize],
        };
        self.cells[mv.to as usize] = undo.prev_from;
        self.cells[mv.from as usize] = EMPTY_CELL;
        ReversibleEdit { board: self, undo }
    }

    /// Apply an actual game move. Not undoable.
    pub fn apply_move(&mut self, mv: Move) {
        self.make_move(mv).commit();
    }

    #[inline]
    pub(crate) fn restore(&mut self, undo: &UndoState) {
        self.cells[undo.mv.from as usize] = undo.prev_from;
        self.cells[undo.mv.to as usize] = undo.prev_to;
    }
}

/// In-place move application that is undone when the guard goes out of scope,
/// on every exit path.
pub struct ReversibleEdit<'a> {
    board: &'a mut BoardState,
    undo: UndoState,
}

impl ReversibleEdit<'_> {
    #[inline]
    pub fn undo_state(&self) -> &UndoState {
        &self.undo
    }

    /// Keep the edit instead of restoring it.
    pub fn commit(self) {
        std::mem::forget(self);
    }
}

impl std::ops::Deref for ReversibleEdit<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl std::ops::DerefMut for ReversibleEdit<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for ReversibleEdit<'_> {
    fn drop(&mut self) {
        self.board.restore(&self.undo);
    }
}

impl FromStr for BoardState {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_state_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_state_string())
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoardState")
            .field(&self.to_state_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    fn start() -> BoardState {
        BoardState::new_game().expect("starting position should parse")
    }

    #[test]
    fn make_move_guard_restores_on_drop() {
        let mut board = start();
        let before = board;
        {
            let edited = board.make_move(Move::new(12, 28, PieceKind::Pawn));
            assert!(edited.is_empty_square(12));
            assert_eq!(
                edited.piece_at(28),
                Some(PieceInfo::new(PieceKind::Pawn, Color::Light))
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn make_move_guard_restores_captured_piece() {
        let mut board =
            BoardState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3").expect("FEN should parse");
        let before = board;
        {
            let edited = board.make_move(Move::new(28, 35, PieceKind::Pawn));
            assert_eq!(edited.count_pieces(), 3);
            assert_eq!(edited.undo_state().prev_to, b'p');
        }
        assert_eq!(board, before);
        assert_eq!(board.count_pieces(), 4);
    }

    #[test]
    fn nested_edits_unwind_in_order() {
        let mut board = start();
        let before = board;
        {
            let mut first = board.make_move(Move::new(12, 28, PieceKind::Pawn));
            {
                let second = first.make_move(Move::new(52, 36, PieceKind::Pawn));
                assert!(second.is_empty_square(52));
            }
            assert_eq!(first.piece_at(52).map(|p| p.kind), Some(PieceKind::Pawn));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn apply_move_is_permanent() {
        let mut board = start();
        board.apply_move(Move::new(1, 18, PieceKind::Knight));
        assert!(board.is_empty_square(1));
        assert_eq!(
            board.piece_at(18),
            Some(PieceInfo::new(PieceKind::Knight, Color::Light))
        );
    }

    #[test]
    fn state_string_validates_length_and_characters() {
        assert_eq!(
            BoardState::from_state_string("0000"),
            Err(ChessErrors::InvalidStateLength(4))
        );

        let mut bad = "0".repeat(64);
        bad.replace_range(10..11, "x");
        assert_eq!(
            BoardState::from_state_string(&bad),
            Err(ChessErrors::InvalidStateChar('x', 10))
        );

        let board = start();
        let parsed: BoardState = board.to_state_string().parse().expect("state should parse");
        assert_eq!(parsed, board);
    }

    #[test]
    fn occupancy_splits_by_color() {
        let board = start();
        assert_eq!(board.occupancy(), 0xFFFF_0000_0000_FFFF);
        assert_eq!(board.occupancy_by_color(Color::Light), 0x0000_0000_0000_FFFF);
        assert_eq!(board.occupancy_by_color(Color::Dark), 0xFFFF_0000_0000_0000);
    }
}
