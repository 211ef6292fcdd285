//! Engine abstraction used by the host session and the console.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Side-to-move score when the engine computes one.
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &BoardState, side: Color, params: &GoParams) -> EngineOutput;
}
