use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenContext;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let targets = ctx.tables.knight_attacks(from) & !ctx.own;
    ctx.push_targets(from, PieceKind::Knight, targets, out);
}

pub fn generate_king_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<Move>) {
    let targets = ctx.tables.king_attacks(from) & !ctx.own;
    ctx.push_targets(from, PieceKind::King, targets, out);
}
