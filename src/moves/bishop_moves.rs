//! Bishop ray geometry: relevant occupancy masks and the ray-cast reference used
//! to fill and verify the magic lookup table.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_geometry::{ray_attacks, relevant_occupancy_mask, Direction};

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_relevant_mask(square: Square) -> Bitboard {
    relevant_occupancy_mask(square, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn bishop_ray_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}
