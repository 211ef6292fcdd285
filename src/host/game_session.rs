//! Game facade for a host application.
//!
//! `GameSession` owns the live board, the side to move and the engine that
//! answers for the computer. Moves played here are actual game moves: they are
//! validated against the move generator, applied irreversibly, and hand the
//! move to the other side.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::host::live_board::LiveBoard;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{column_row_to_square, square_to_algebraic};

pub struct GameSession {
    board: BoardState,
    side: Color,
    engine: Box<dyn Engine>,
    generator: PseudoLegalMoveGenerator<'static>,
}

impl GameSession {
    /// Starting position, White to move, default negamax engine.
    pub fn new_game() -> ChessResult<Self> {
        Self::from_fen(STARTING_POSITION_FEN)
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self {
            board: BoardState::from_fen(fen)?,
            side: Color::Light,
            engine: Box::new(NegamaxEngine::default()),
            generator: PseudoLegalMoveGenerator::shared(),
        })
    }

    pub fn with_engine(mut self, engine: Box<dyn Engine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = engine;
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn set_side_to_move(&mut self, side: Color) {
        self.side = side;
    }

    /// Load a new position. White moves next. On error nothing changes.
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        self.board.load_fen(fen)?;
        self.side = Color::Light;
        self.engine.new_game();
        log::info!("loaded position {}", self.board.to_state_string());
        Ok(())
    }

    pub fn state_string(&self) -> String {
        self.board.to_state_string()
    }

    /// Replace the board from a 64-character state string. On error nothing
    /// changes.
    pub fn set_state_string(&mut self, state: &str) -> ChessResult<()> {
        self.board = BoardState::from_state_string(state)?;
        Ok(())
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.board.clear();
    }

    pub fn piece_at_column_row(&self, column: u8, row: u8) -> ChessResult<Option<PieceInfo>> {
        column_row_to_square(column, row)?;
        Ok(LiveBoard::piece_at(&self.board, column, row))
    }

    /// Whether `square` holds a piece of the side to move.
    pub fn can_move_from(&self, square: Square) -> bool {
        square < 64
            && self
                .board
                .piece_at(square)
                .is_some_and(|piece| piece.color == self.side)
    }

    /// Pseudo-legal moves for the side to move.
    pub fn available_moves(&self) -> Vec<Move> {
        self.generator.generate_moves(&self.board, self.side)
    }

    /// Play `from -> to` for the side to move and pass the turn.
    pub fn play_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        for square in [from, to] {
            if square > 63 {
                return Err(ChessErrors::SquareOutOfRange(usize::from(square)));
            }
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessErrors::EmptySourceSquare(from))?;
        if piece.color != self.side {
            return Err(ChessErrors::WrongSideToMove(from));
        }

        let mv = self
            .available_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or_else(|| {
                ChessErrors::IllegalMove(square_to_algebraic(from), square_to_algebraic(to))
            })?;

        self.commit(mv);
        Ok(mv)
    }

    /// Ask the engine for a move without playing it.
    pub fn suggest_move(&mut self, params: &GoParams) -> EngineOutput {
        self.engine.choose_move(&self.board, self.side, params)
    }

    /// Let the engine play for the side to move. Returns the `(from, to)` it
    /// played, or `None` when no move was available.
    pub fn computer_move(&mut self) -> Option<(Square, Square)> {
        self.computer_move_with(&GoParams::default())
            .map(|mv| mv.squares())
    }

    pub fn computer_move_with(&mut self, params: &GoParams) -> Option<Move> {
        let output = self.suggest_move(params);
        let Some(mv) = output.best_move else {
            log::warn!("{:?} has no moves", self.side);
            return None;
        };
        self.commit(mv);
        Some(mv)
    }

    fn commit(&mut self, mv: Move) {
        log::info!("{:?} plays {mv}", self.side);
        self.board.apply_move(mv);
        self.side = self.side.opposite();
    }
}
