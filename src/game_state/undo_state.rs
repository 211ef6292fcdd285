use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move`: the move and the prior contents of the
/// two cells it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_from: u8,
    pub prev_to: u8,
}
