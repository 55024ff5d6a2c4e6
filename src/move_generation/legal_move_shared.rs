use crate::game_state::chess_types::*;

/// Walks unit steps from just after `from` up to (excluding) `to` and
/// reports whether any intermediate square is occupied.
///
/// The caller guarantees that `from -> to` is a straight or diagonal line.
pub fn is_path_blocked(board: &Board, from: Position, to: Position) -> bool {
    let step_r = (to.row as i8 - from.row as i8).signum();
    let step_c = (to.col as i8 - from.col as i8).signum();

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_r, step_c) else {
            return false;
        };
        if next == to {
            return false;
        }
        if !board.is_empty_at(next) {
            return true;
        }
        current = next;
    }
}

/// Destination is empty or holds a piece of the other color.
#[inline]
pub fn destination_open(board: &Board, to: Position, mover: Color) -> bool {
    board
        .piece_at(to)
        .is_none_or(|occupant| occupant.is_opponent_of(mover))
}
