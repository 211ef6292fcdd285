//! Fixed-depth negamax with alpha-beta pruning.
//!
//! The search edits one scratch board in place: every move is applied through
//! a `ReversibleEdit` guard, so both touched squares are restored before the
//! next sibling is tried, whichever way the recursion returns. A side with no
//! moves scores 0; the core has no check detection and cannot tell mate from
//! stalemate.

use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MaterialCentralityScorer};

/// Window bound. Comfortably above any reachable evaluation and safe to negate.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no moves at all.
    pub best_move: Option<Move>,
    /// Score from the side to move's perspective.
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

pub struct NegamaxSearch<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    nodes: u64,
}

impl<'a, G: MoveGenerator, S: BoardScorer> NegamaxSearch<'a, G, S> {
    pub fn new(generator: &'a G, scorer: &'a S) -> Self {
        Self {
            generator,
            scorer,
            nodes: 0,
        }
    }

    /// Nodes visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for `side`. Candidates are tried in generation order
    /// and the first one reaching the maximum score wins ties. A depth of 0 is
    /// searched as depth 1.
    pub fn search_root(&mut self, board: &BoardState, side: Color, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        let start_nodes = self.nodes;
        let mut scratch = *board;

        let candidates = self.generator.generate_moves(&scratch, side);
        let mut alpha = -SCORE_INFINITY;
        let beta = SCORE_INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in candidates {
            let score = {
                let mut edited = scratch.make_move(mv);
                -self.negamax(&mut edited, depth - 1, -beta, -alpha, side.opposite())
            };

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
            }
        }

        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            best_score: best.map_or(0, |(_, score)| score),
            depth,
            nodes: self.nodes - start_nodes,
        };

        match result.best_move {
            Some(mv) => log::debug!(
                "search {side:?} depth {depth}: best {mv} score {} nodes {}",
                result.best_score,
                result.nodes
            ),
            None => log::debug!("search {side:?} depth {depth}: no moves available"),
        }

        result
    }

    /// Score of `board` for `color` after searching `depth` plies.
    ///
    /// `board` is edited during the call and restored before it returns.
    pub fn negamax(
        &mut self,
        board: &mut BoardState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        color: Color,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return color.sign() * self.scorer.score(board);
        }

        let moves = self.generator.generate_moves(board, color);
        if moves.is_empty() {
            return 0;
        }

        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let score = {
                let mut edited = board.make_move(mv);
                -self.negamax(&mut edited, depth - 1, -beta, -alpha, color.opposite())
            };

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// Negamax without pruning. Visits the whole tree; used to check that
    /// pruning never changes a result.
    pub fn negamax_full_width(&mut self, board: &mut BoardState, depth: u8, color: Color) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return color.sign() * self.scorer.score(board);
        }

        let moves = self.generator.generate_moves(board, color);
        if moves.is_empty() {
            return 0;
        }

        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let mut edited = board.make_move(mv);
            let score = -self.negamax_full_width(&mut edited, depth - 1, color.opposite());
            best = best.max(score);
        }

        best
    }
}

/// Best move for `side` with the shared tables and the default scorer.
pub fn search(board: &BoardState, depth: u8, side: Color) -> SearchResult {
    let generator = PseudoLegalMoveGenerator::shared();
    NegamaxSearch::new(&generator, &MaterialCentralityScorer).search_root(board, side, depth)
}

/// Alpha-beta negamax value of `board` for `color`, leaving `board` unchanged.
pub fn negamax(board: &BoardState, depth: u8, alpha: i32, beta: i32, color: Color) -> i32 {
    let generator = PseudoLegalMoveGenerator::shared();
    let mut scratch = *board;
    NegamaxSearch::new(&generator, &MaterialCentralityScorer)
        .negamax(&mut scratch, depth, alpha, beta, color)
}
