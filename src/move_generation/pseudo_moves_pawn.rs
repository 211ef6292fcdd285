use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenContext;
use crate::moves::board_geometry::offset_square;
use crate::moves::move_descriptions::Move;

/// Pushes first (single, then double), then captures toward the a-file and
/// the h-file. A pawn on its last rank has nowhere to go.
pub fn generate_pawn_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let forward: i8 = if ctx.side == Color::Light { 1 } else { -1 };

    if let Some(one_step) = offset_square(from, 0, forward) {
        if (ctx.occupancy & square_bit(one_step)) == 0 {
            out.push(Move::new(from, one_step, PieceKind::Pawn));

            if square_rank(from) == ctx.side.pawn_start_rank() {
                if let Some(two_step) = offset_square(one_step, 0, forward) {
                    if (ctx.occupancy & square_bit(two_step)) == 0 {
                        out.push(Move::new(from, two_step, PieceKind::Pawn));
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, file_delta, forward) else {
            continue;
        };
        if (ctx.enemy & square_bit(to)) != 0 {
            out.push(Move::new(from, to, PieceKind::Pawn));
        }
    }
}
