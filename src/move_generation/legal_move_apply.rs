//! Applying and reverting moves.
//!
//! `apply_move` mutates a board in place and returns the record needed by
//! `undo_move`. `HypotheticalMove` pairs the two so a trial move is always
//! reverted when the guard goes out of scope, including during unwinding.

use std::ops::Deref;

use crate::game_state::chess_types::*;

/// Moves the piece on `mv.from` to `mv.to`, overwriting any occupant.
///
/// Legality is not checked. Panics if the source square is empty.
pub fn apply_move(board: &mut Board, mv: Move) -> UndoState {
    let Some(moved_piece) = board.take_piece(mv.from) else {
        panic!("apply_move called with empty source square {:?}", mv.from);
    };
    let captured_piece = board.take_piece(mv.to);
    board.set_piece(mv.to, Some(moved_piece));

    UndoState {
        mv,
        moved_piece,
        captured_piece,
    }
}

/// Exact inverse of [`apply_move`].
pub fn undo_move(board: &mut Board, undo: UndoState) {
    board.set_piece(undo.mv.from, Some(undo.moved_piece));
    board.set_piece(undo.mv.to, undo.captured_piece);
}

/// Copying variant for callers that keep the previous board.
pub fn apply_move_to_copy(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    apply_move(&mut next, mv);
    next
}

/// A move applied for inspection only; dropped guards restore the board.
pub struct HypotheticalMove<'a> {
    board: &'a mut Board,
    undo: Option<UndoState>,
}

impl<'a> HypotheticalMove<'a> {
    pub fn apply(board: &'a mut Board, mv: Move) -> Self {
        let undo = apply_move(board, mv);
        Self {
            board,
            undo: Some(undo),
        }
    }
}

impl Deref for HypotheticalMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            undo_move(self.board, undo);
        }
    }
}
