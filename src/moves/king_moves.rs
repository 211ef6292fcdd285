//! King attack sets, one bitboard per origin square.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_geometry::{leaper_table, Direction};

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}
