//! Static position scoring.
//!
//! Search is generic over `BoardScorer` so the heuristic can be swapped without
//! touching the search code. Scores are always from White's point of view;
//! the search applies the side-to-move sign itself.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective (positive favors White).
    fn score(&self, board: &BoardState) -> i32;
}

/// Material plus a small centralization bonus for knights and bishops.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialCentralityScorer;

impl MaterialCentralityScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 200,
            PieceKind::Bishop => 230,
            PieceKind::Rook => 400,
            PieceKind::Queen => 900,
            PieceKind::King => 2000,
        }
    }

    /// `2 * max(0, 6 - d)` where `d` is the file plus rank distance to the
    /// four centre squares.
    #[inline]
    pub const fn centrality_bonus(square: Square) -> i32 {
        let d = distance_to_centre_line(square_file(square))
            + distance_to_centre_line(square_rank(square));
        let reach = 6 - d;
        if reach > 0 {
            2 * reach
        } else {
            0
        }
    }

    #[inline]
    fn piece_score(piece: PieceInfo, square: Square) -> i32 {
        let mut value = Self::piece_value(piece.kind);
        if matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop) {
            value += Self::centrality_bonus(square);
        }
        if piece.is_white() {
            value
        } else {
            -value
        }
    }
}

/// Distance from a file or rank index to the nearer of indices 3 and 4.
#[inline]
const fn distance_to_centre_line(index: u8) -> i32 {
    if index <= 3 {
        3 - index as i32
    } else {
        index as i32 - 4
    }
}

impl BoardScorer for MaterialCentralityScorer {
    fn score(&self, board: &BoardState) -> i32 {
        (0..64u8)
            .filter_map(|sq| board.piece_at(sq).map(|piece| Self::piece_score(piece, sq)))
            .sum()
    }
}

/// White-perspective evaluation with the default scorer.
#[inline]
pub fn evaluate(board: &BoardState) -> i32 {
    MaterialCentralityScorer.score(board)
}

#[cfg(test)]
mod tests {
    use super::{evaluate, MaterialCentralityScorer};
    use crate::game_state::chess_types::*;
    use test_case::test_case;

    #[test_case(27, 12 ; "d4 is central")]
    #[test_case(36, 12 ; "e5 is central")]
    #[test_case(0, 0 ; "a1 corner")]
    #[test_case(63, 0 ; "h8 corner")]
    #[test_case(1, 2 ; "b1")]
    #[test_case(18, 8 ; "c3")]
    #[test_case(7, 0 ; "h1")]
    fn centrality_bonus(square: Square, expected: i32) {
        assert_eq!(MaterialCentralityScorer::centrality_bonus(square), expected);
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = BoardState::new_game().expect("starting position should parse");
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate(&BoardState::empty()), 0);
    }

    #[test]
    fn material_and_sign_follow_color() {
        // White queen vs black rook, kings cancel.
        let board = BoardState::from_fen("3rk3/8/8/8/8/8/8/3QK3").expect("FEN should parse");
        assert_eq!(evaluate(&board), 900 - 400);
    }

    #[test]
    fn knights_and_bishops_get_centrality() {
        let white_knight_d4 =
            BoardState::from_fen("4k3/8/8/8/3N4/8/8/4K3").expect("FEN should parse");
        assert_eq!(evaluate(&white_knight_d4), 200 + 12);

        let black_bishop_a8 =
            BoardState::from_fen("b3k3/8/8/8/8/8/8/4K3").expect("FEN should parse");
        assert_eq!(evaluate(&black_bishop_a8), -230);

        // Rooks get no positional term.
        let rook_d4 = BoardState::from_fen("4k3/8/8/8/3R4/8/8/4K3").expect("FEN should parse");
        assert_eq!(evaluate(&rook_d4), 400);
    }
}
