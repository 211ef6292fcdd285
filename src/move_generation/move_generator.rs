//! Pseudo-legal move generation.
//!
//! One generator feeds every consumer (root driver, recursive search, perft,
//! host move validation), so all of them see the same move set for a position.
//! Moves come out in ascending origin-square order and, within a square, in
//! the order the per-piece generator emits them.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_leaper::{generate_king_moves, generate_knight_moves};
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_slider::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::attack_tables::{attack_tables, AttackTables};
use crate::moves::move_descriptions::Move;

/// Everything a per-piece generator needs about the position, computed once
/// per call.
pub struct MoveGenContext<'a> {
    pub board: &'a BoardState,
    pub tables: &'a AttackTables,
    pub side: Color,
    pub occupancy: Bitboard,
    pub own: Bitboard,
    pub enemy: Bitboard,
}

impl<'a> MoveGenContext<'a> {
    pub fn new(board: &'a BoardState, side: Color, tables: &'a AttackTables) -> Self {
        let own = board.occupancy_by_color(side);
        let occupancy = board.occupancy();
        Self {
            board,
            tables,
            side,
            occupancy,
            own,
            enemy: occupancy & !own,
        }
    }

    /// Push one move per set bit of `targets`, lowest square first.
    #[inline]
    pub fn push_targets(&self, from: Square, kind: PieceKind, targets: Bitboard, out: &mut Vec<Move>) {
        let mut remaining = targets;
        while remaining != 0 {
            let to = remaining.trailing_zeros() as Square;
            out.push(Move::new(from, to, kind));
            remaining &= remaining - 1;
        }
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &BoardState, side: Color) -> Vec<Move>;
}

/// Pseudo-legal generator over a set of attack tables.
#[derive(Debug, Clone, Copy)]
pub struct PseudoLegalMoveGenerator<'t> {
    tables: &'t AttackTables,
}

impl PseudoLegalMoveGenerator<'static> {
    /// Generator over the shared process-wide tables.
    pub fn shared() -> Self {
        Self {
            tables: attack_tables(),
        }
    }
}

impl Default for PseudoLegalMoveGenerator<'static> {
    fn default() -> Self {
        Self::shared()
    }
}

impl<'t> PseudoLegalMoveGenerator<'t> {
    pub fn new(tables: &'t AttackTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t AttackTables {
        self.tables
    }

    pub fn generate_into(&self, board: &BoardState, side: Color, out: &mut Vec<Move>) {
        let ctx = MoveGenContext::new(board, side, self.tables);

        let mut pieces = ctx.own;
        while pieces != 0 {
            let from = pieces.trailing_zeros() as Square;
            if let Some(piece) = board.piece_at(from) {
                match piece.kind {
                    PieceKind::Pawn => generate_pawn_moves(&ctx, from, out),
                    PieceKind::Knight => generate_knight_moves(&ctx, from, out),
                    PieceKind::Bishop => generate_bishop_moves(&ctx, from, out),
                    PieceKind::Rook => generate_rook_moves(&ctx, from, out),
                    PieceKind::Queen => generate_queen_moves(&ctx, from, out),
                    PieceKind::King => generate_king_moves(&ctx, from, out),
                }
            }
            pieces &= pieces - 1;
        }
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator<'_> {
    fn generate_moves(&self, board: &BoardState, side: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.generate_into(board, side, &mut out);
        out
    }
}

/// Pseudo-legal moves for `side` using the shared tables.
pub fn generate_moves(board: &BoardState, side: Color) -> Vec<Move> {
    PseudoLegalMoveGenerator::shared().generate_moves(board, side)
}
