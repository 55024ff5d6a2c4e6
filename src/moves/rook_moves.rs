use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{destination_open, is_path_blocked};

pub fn rook_pattern(board: &Board, mv: Move, color: Color) -> bool {
    let (dr, dc) = mv.delta();
    (dr == 0) != (dc == 0)
        && !is_path_blocked(board, mv.from, mv.to)
        && destination_open(board, mv.to, color)
}
