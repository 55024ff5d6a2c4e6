//! Pawn movement pattern.
//!
//! Single push onto an empty square, double push from the home row through
//! two empty squares, and diagonal capture of an opposing piece. No en
//! passant and no promotion.

use crate::game_state::chess_types::*;

pub fn pawn_pattern(board: &Board, mv: Move, color: Color) -> bool {
    let (dr, dc) = mv.delta();
    let dir = color.pawn_direction();

    if dr == dir && dc == 0 {
        return board.is_empty_at(mv.to);
    }

    if dr == 2 * dir && dc == 0 && mv.from.row == color.pawn_home_row() {
        let Some(between) = mv.from.offset(dir, 0) else {
            return false;
        };
        return board.is_empty_at(between) && board.is_empty_at(mv.to);
    }

    if dr == dir && dc.abs() == 1 {
        return board
            .piece_at(mv.to)
            .is_some_and(|target| target.is_opponent_of(color));
    }

    false
}
