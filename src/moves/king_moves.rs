//! King movement pattern: one step in any direction, no castling.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::destination_open;

pub fn king_pattern(board: &Board, mv: Move, color: Color) -> bool {
    let (dr, dc) = mv.delta();
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0) && destination_open(board, mv.to, color)
}
