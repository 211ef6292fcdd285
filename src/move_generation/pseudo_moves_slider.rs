use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenContext;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let targets = ctx.tables.bishop_attacks(from, ctx.occupancy) & !ctx.own;
    ctx.push_targets(from, PieceKind::Bishop, targets, out);
}

pub fn generate_rook_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let targets = ctx.tables.rook_attacks(from, ctx.occupancy) & !ctx.own;
    ctx.push_targets(from, PieceKind::Rook, targets, out);
}

pub fn generate_queen_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let targets = ctx.tables.queen_attacks(from, ctx.occupancy) & !ctx.own;
    ctx.push_targets(from, PieceKind::Queen, targets, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::generate_moves;

    fn targets_from(fen: &str, side: Color, from: Square) -> Vec<Square> {
        let board = BoardState::from_fen(fen).expect("FEN should parse");
        generate_moves(&board, side)
            .into_iter()
            .filter(|m| m.from == from)
            .map(|m| m.to)
            .collect()
    }

    #[test]
    fn rook_stops_on_enemy_and_before_own() {
        // Rook a1, own pawn a3, black knight d1.
        let targets = targets_from("4k3/8/8/8/8/P7/8/R2n3K", Color::Light, 0);
        assert_eq!(targets, vec![1, 2, 3, 8]);
    }

    #[test]
    fn queen_in_open_centre_has_twenty_seven_moves() {
        let targets = targets_from("k7/8/8/8/3Q4/8/8/7K", Color::Light, 27);
        assert_eq!(targets.len(), 27);
    }

    #[test]
    fn bishop_at_start_is_boxed_in() {
        assert!(targets_from(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            Color::Light,
            2
        )
        .is_empty());
    }
}
