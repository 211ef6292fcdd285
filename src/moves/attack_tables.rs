//! Process-wide attack tables.
//!
//! `AttackTables` bundles the leaper tables and both magic slider tables. It is
//! built by one explicit step and never written afterwards, so a shared
//! reference can be read from any number of threads. `init_attack_tables`
//! publishes a single instance behind a one-time initialization barrier.

use std::sync::OnceLock;

use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bishop_moves::{bishop_ray_attacks, bishop_relevant_mask, BISHOP_DIRECTIONS};
use crate::moves::king_moves::KING_ATTACKS;
use crate::moves::knight_moves::KNIGHT_ATTACKS;
use crate::moves::magic::SliderTable;
use crate::moves::rook_moves::{rook_ray_attacks, rook_relevant_mask, ROOK_DIRECTIONS};

/// Seed for the magic search of the shared tables.
pub const DEFAULT_MAGIC_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

static ATTACK_TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Build (first call only) and return the shared tables.
pub fn init_attack_tables() -> &'static AttackTables {
    ATTACK_TABLES.get_or_init(AttackTables::build)
}

/// Shared tables; initializes them if no caller has yet.
#[inline]
pub fn attack_tables() -> &'static AttackTables {
    init_attack_tables()
}

#[derive(Debug, Clone)]
pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    bishop: SliderTable,
    rook: SliderTable,
}

impl AttackTables {
    pub fn build() -> Self {
        Self::build_with_seed(DEFAULT_MAGIC_SEED)
    }

    pub fn build_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bishop = SliderTable::build(
            &mut rng,
            &BISHOP_DIRECTIONS,
            bishop_relevant_mask,
            bishop_ray_attacks,
        );
        let rook = SliderTable::build(
            &mut rng,
            &ROOK_DIRECTIONS,
            rook_relevant_mask,
            rook_ray_attacks,
        );

        log::debug!(
            "attack tables built: {} bishop and {} rook entries (seed {seed:#x})",
            bishop.len(),
            rook.len()
        );

        Self {
            knight: KNIGHT_ATTACKS,
            king: KING_ATTACKS,
            bishop,
            rook,
        }
    }

    #[inline]
    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        self.knight[square as usize]
    }

    #[inline]
    pub fn king_attacks(&self, square: Square) -> Bitboard {
        self.king[square as usize]
    }

    /// Bishop attacks given the full-board occupancy.
    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop.attacks(square, occupancy)
    }

    /// Rook attacks given the full-board occupancy.
    #[inline]
    pub fn rook_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.rook.attacks(square, occupancy)
    }

    #[inline]
    pub fn queen_attacks(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(square, occupancy) | self.rook_attacks(square, occupancy)
    }

    pub fn bishop_table(&self) -> &SliderTable {
        &self.bishop
    }

    pub fn rook_table(&self) -> &SliderTable {
        &self.rook
    }
}
