//! Errors used throughout the chess crate.
//!
//! `ChessError` is the single error type for recoverable failures: rejected
//! moves, malformed placement or coordinate text, and engine failures.
//! Out-of-range coordinates are programming errors and panic in
//! `Position::new` instead of surfacing here.

use crate::game_state::chess_types::{Color, Move, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The move breaks a movement rule or leaves the mover's king attacked.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    #[error("no piece on {position}")]
    EmptySquare { position: Position },

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {position} does not belong to {expected}")]
    WrongSide { position: Position, expected: Color },

    #[error("the game is already over")]
    GameOver,

    /// A human move was submitted while the engine is on move.
    #[error("it is the engine's turn to move")]
    AwaitingEngine,

    #[error("invalid board placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid algebraic coordinate: {0}")]
    InvalidAlgebraic(String),

    #[error("engine failure: {0}")]
    Engine(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
