//! Rook ray geometry: relevant occupancy masks and the ray-cast reference used
//! to fill and verify the magic lookup table.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_geometry::{ray_attacks, relevant_occupancy_mask, Direction};

pub const ROOK_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_relevant_mask(square: Square) -> Bitboard {
    relevant_occupancy_mask(square, &ROOK_DIRECTIONS)
}

#[inline]
pub fn rook_ray_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}
