//! Random-move engine.
//!
//! Selects uniformly from the pseudo-legal moves and is used for diagnostics,
//! console testing, and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct RandomEngine {
    generator: PseudoLegalMoveGenerator<'static>,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible move choice for tests and matches.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            generator: PseudoLegalMoveGenerator::shared(),
            rng,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &BoardState, side: Color, params: &GoParams) -> EngineOutput {
        let moves = self.generator.generate_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        out
    }
}
