//! Engine abstraction layer used by the game controller.
//!
//! Different move-selection strategies can be plugged into a controller or
//! the self-play harness behind a single trait object.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `color`. `best_move` is `None` when no legal move exists.
    fn choose_move(&mut self, board: &Board, color: Color) -> ChessResult<EngineOutput>;
}
