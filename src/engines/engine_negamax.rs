//! Fixed-depth negamax engine.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::MaterialCentralityScorer;
use crate::search::negamax::{NegamaxSearch, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    generator: PseudoLegalMoveGenerator<'static>,
    scorer: MaterialCentralityScorer,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            generator: PseudoLegalMoveGenerator::shared(),
            scorer: MaterialCentralityScorer,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Negamax"
    }

    fn choose_move(&mut self, board: &BoardState, side: Color, params: &GoParams) -> EngineOutput {
        let depth = params.depth.unwrap_or(self.config.depth);
        let mut search = NegamaxSearch::new(&self.generator, &self.scorer);
        let result = search.search_root(board, side, depth);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            nodes: result.nodes,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            result.depth, result.best_score, result.nodes
        ));
        out
    }
}
