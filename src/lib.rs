//! Crate root module declarations for the parlour chess rules engine.
//!
//! This file exposes the board model, movement patterns, legality checks,
//! engines, the game controller and utility helpers so the binary, tests and
//! benches can import stable module paths.

pub mod errors;
pub mod rules_interface;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_patterns;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod controller {
    pub mod game_config;
    pub mod game_controller;
    pub mod text_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod placement_parser;
    pub mod render_game_state;
}
