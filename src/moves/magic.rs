//! Magic-bitboard lookup for sliding pieces.
//!
//! For each origin square the relevant occupancy subset is multiplied by a
//! per-square magic and shifted down to index a dense table of attack sets.
//! Magics are searched for with a seeded RNG while the table is built; a
//! candidate that maps two subsets with different attack sets to the same slot
//! is discarded and the search moves on to the next candidate.

use rand::Rng;

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_geometry::{occupancy_subsets, Direction};

/// Lookup parameters for one origin square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicEntry {
    pub mask: Bitboard,
    pub magic: u64,
    pub shift: u32,
    pub offset: usize,
}

impl MagicEntry {
    /// Slot in the shared attack table for a full-board occupancy.
    #[inline]
    pub fn index(&self, occupancy: Bitboard) -> usize {
        let relevant = occupancy & self.mask;
        self.offset + (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline]
    pub fn table_len(&self) -> usize {
        1usize << self.mask.count_ones()
    }
}

/// Attack sets for one slider kind on all 64 squares.
#[derive(Debug, Clone)]
pub struct SliderTable {
    entries: Vec<MagicEntry>,
    attacks: Vec<Bitboard>,
}

impl SliderTable {
    /// Build the table, searching a magic for every origin square.
    ///
    /// `mask_for` gives the relevant occupancy mask of a square and
    /// `reference` the ray-cast attack set for a square and occupancy.
    pub fn build<R: Rng + ?Sized>(
        rng: &mut R,
        directions: &[Direction],
        mask_for: impl Fn(Square) -> Bitboard,
        reference: impl Fn(Square, Bitboard) -> Bitboard,
    ) -> Self {
        let mut entries = Vec::with_capacity(64);
        let mut attacks = Vec::new();

        for square in 0..64u8 {
            let mask = mask_for(square);
            let subsets = occupancy_subsets(mask);
            let expected: Vec<Bitboard> = subsets
                .iter()
                .map(|&occupancy| reference(square, occupancy))
                .collect();

            let (magic, slots, attempts) = find_magic(rng, mask, &subsets, &expected);
            log::trace!(
                "magic for square {square} ({} directions): {magic:#018x} after {attempts} candidates",
                directions.len()
            );

            entries.push(MagicEntry {
                mask,
                magic,
                shift: 64 - mask.count_ones(),
                offset: attacks.len(),
            });
            attacks.extend_from_slice(&slots);
        }

        Self { entries, attacks }
    }

    #[inline]
    pub fn attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.attacks[self.entries[square as usize].index(occupancy)]
    }

    #[inline]
    pub fn entry(&self, square: Square) -> &MagicEntry {
        &self.entries[square as usize]
    }

    /// Total number of stored attack sets across all squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Search candidates until one indexes every subset without a destructive
/// collision. Returns the magic, its filled slots and how many candidates were
/// tried.
fn find_magic<R: Rng + ?Sized>(
    rng: &mut R,
    mask: Bitboard,
    subsets: &[Bitboard],
    expected: &[Bitboard],
) -> (u64, Vec<Bitboard>, u64) {
    let bits = mask.count_ones();
    let shift = 64 - bits;
    let mut slots = vec![0u64; 1usize << bits];
    // Slot ownership per attempt; avoids clearing `slots` between candidates.
    let mut epoch_of_slot = vec![0u64; 1usize << bits];
    let mut attempt = 0u64;

    loop {
        attempt += 1;
        let candidate = sparse_random(rng);
        if (mask.wrapping_mul(candidate) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        let mut ok = true;
        for (&occupancy, &attack) in subsets.iter().zip(expected) {
            let idx = (occupancy.wrapping_mul(candidate) >> shift) as usize;
            if epoch_of_slot[idx] != attempt {
                epoch_of_slot[idx] = attempt;
                slots[idx] = attack;
            } else if slots[idx] != attack {
                ok = false;
                break;
            }
        }

        if ok {
            return (candidate, slots, attempt);
        }
    }
}

#[inline]
fn sparse_random<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::SliderTable;
    use crate::moves::board_geometry::occupancy_subsets;
    use crate::moves::bishop_moves::{
        bishop_ray_attacks, bishop_relevant_mask, BISHOP_DIRECTIONS,
    };

    #[test]
    fn independent_seed_still_produces_exact_lookups() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = SliderTable::build(
            &mut rng,
            &BISHOP_DIRECTIONS,
            bishop_relevant_mask,
            bishop_ray_attacks,
        );

        for square in 0..64u8 {
            let entry = table.entry(square);
            assert_eq!(entry.shift, 64 - entry.mask.count_ones());
            for occupancy in occupancy_subsets(entry.mask) {
                assert_eq!(
                    table.attacks(square, occupancy),
                    bishop_ray_attacks(square, occupancy),
                    "square {square} occupancy {occupancy:#x}"
                );
            }
        }
        assert_eq!(table.len(), 5248);
    }
}
