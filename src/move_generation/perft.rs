//! Pseudo-legal perft: leaf-node counts over the move generator.
//!
//! Walks the tree with in-place make/unmake. Counts are pseudo-legal, so they
//! agree with standard legal perft tables only while no side can leave its own
//! king in check (depths 1..=3 from the starting position).

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft(board: &BoardState, side: Color, depth: u8) -> PerftCounts {
    perft_with(&PseudoLegalMoveGenerator::shared(), board, side, depth)
}

pub fn perft_with<G: MoveGenerator>(
    generator: &G,
    board: &BoardState,
    side: Color,
    depth: u8,
) -> PerftCounts {
    let mut scratch = *board;
    perft_recurse(generator, &mut scratch, side, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &mut BoardState,
    side: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_moves(board, side);
    let mut total = PerftCounts::default();

    for mv in moves {
        let is_capture = !board.is_empty_square(mv.to);
        if depth == 1 {
            total.nodes += 1;
            if is_capture {
                total.captures += 1;
            }
            continue;
        }

        let mut edited = board.make_move(mv);
        total.merge(perft_recurse(generator, &mut edited, side.opposite(), depth - 1));
    }

    total
}

/// Per-root-move node counts, sorted by generation order.
pub fn perft_divide(board: &BoardState, side: Color, depth: u8) -> Vec<(String, u64)> {
    let generator = PseudoLegalMoveGenerator::shared();
    let mut scratch = *board;
    let moves = generator.generate_moves(&scratch, side);

    moves
        .into_iter()
        .map(|mv| {
            let mut edited = scratch.make_move(mv);
            let nodes = perft_recurse(
                &generator,
                &mut edited,
                side.opposite(),
                depth.saturating_sub(1),
            )
            .nodes;
            (mv.to_string(), nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_counts() {
        let board = BoardState::new_game().expect("starting position should parse");
        assert_eq!(perft(&board, Color::Light, 1).nodes, 20);
        assert_eq!(perft(&board, Color::Light, 2).nodes, 400);

        let depth3 = perft(&board, Color::Light, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let board = BoardState::new_game().expect("starting position should parse");
        let before = board;
        let _ = perft(&board, Color::Dark, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = BoardState::new_game().expect("starting position should parse");
        let divided = perft_divide(&board, Color::Light, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(divided.iter().all(|(_, n)| *n == 20));
    }
}
