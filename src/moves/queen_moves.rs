use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::rook_moves::rook_pattern;

#[inline]
pub fn queen_pattern(board: &Board, mv: Move, color: Color) -> bool {
    bishop_pattern(board, mv, color) || rook_pattern(board, mv, color)
}
