//! Crate root module declarations for the negamax chess core.
//!
//! This file exposes the board model, attack tables, move generation, search,
//! engines, host boundary, console front-end, and utility helpers so the
//! binary, tests, and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod bishop_moves;
    pub mod board_geometry;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod magic;
    pub mod move_descriptions;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_leaper;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_slider;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod host {
    pub mod game_session;
    pub mod live_board;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
