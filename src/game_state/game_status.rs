//! Terminal-state detection.
//!
//! Checkmate and stalemate follow the usual definitions. A missing king can
//! only come from a hand-built position, since legal play never captures a
//! king; it is reported as `KingCaptured` rather than treated as an error.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{find_king, is_king_in_check};
use crate::move_generation::legal_move_generator::enumerate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    KingCaptured { winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::KingCaptured { winner } => Some(winner),
            GameStatus::Ongoing | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::KingCaptured { winner } => write!(f, "king captured, {winner} wins"),
        }
    }
}

pub fn evaluate_game_end(board: &Board, color_to_move: Color) -> GameStatus {
    if enumerate_legal_moves(board, color_to_move).is_empty() {
        return if is_king_in_check(board, color_to_move) {
            GameStatus::Checkmate {
                winner: color_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    // White's king is looked up first, so a board missing both kings goes to Black.
    match (find_king(board, Color::White), find_king(board, Color::Black)) {
        (None, _) => GameStatus::KingCaptured {
            winner: Color::Black,
        },
        (Some(_), None) => GameStatus::KingCaptured {
            winner: Color::White,
        },
        (Some(_), Some(_)) => GameStatus::Ongoing,
    }
}
