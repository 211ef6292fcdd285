//! Square arithmetic shared by the attack-table builders.
//!
//! Leaper tables are built at compile time from offset lists. Slider helpers
//! walk rays square by square; they are the slow reference the magic tables are
//! filled from and checked against.

use crate::game_state::chess_types::{Bitboard, Square};

/// `(file step, rank step)` pairs.
pub type Direction = (i8, i8);

/// Square reached by stepping `(d_file, d_rank)` from `square`, if still on the board.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = (square % 8) as i8 + d_file;
    let rank = (square / 8) as i8 + d_rank;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Fixed-offset attack sets for every origin square.
pub const fn leaper_table(offsets: &[Direction; 8]) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut attacks = 0u64;
        let mut i = 0usize;
        while i < offsets.len() {
            if let Some(target) = offset_square(sq as Square, offsets[i].0, offsets[i].1) {
                attacks |= 1u64 << target;
            }
            i += 1;
        }
        table[sq] = attacks;
        sq += 1;
    }

    table
}

/// Squares a slider on `square` attacks, each ray stopping on (and including)
/// the first occupied square.
pub fn ray_attacks(square: Square, occupancy: Bitboard, directions: &[Direction]) -> Bitboard {
    let mut attacks = 0u64;

    for &(d_file, d_rank) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, d_file, d_rank) {
            let bit = 1u64 << next;
            attacks |= bit;
            if (occupancy & bit) != 0 {
                break;
            }
            current = next;
        }
    }

    attacks
}

/// Ray squares whose occupancy can change the attack set: every ray square
/// except the last one before the edge.
pub fn relevant_occupancy_mask(square: Square, directions: &[Direction]) -> Bitboard {
    let mut mask = 0u64;

    for &(d_file, d_rank) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, d_file, d_rank) {
            if offset_square(next, d_file, d_rank).is_none() {
                break;
            }
            mask |= 1u64 << next;
            current = next;
        }
    }

    mask
}

/// Every subset of `mask`, starting with the empty set (carry-rippler walk).
pub fn occupancy_subsets(mask: Bitboard) -> Vec<Bitboard> {
    let mut subsets = Vec::with_capacity(1usize << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}
