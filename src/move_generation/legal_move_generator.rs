//! Full legality: movement pattern plus king safety.
//!
//! `is_legal_move` gates every raw movement pattern with the self-check test.
//! The test applies the move to a scratch board through `HypotheticalMove`,
//! so the scratch is restored before the next candidate is tried.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::HypotheticalMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::movement_patterns::matches_movement_pattern;

/// Whether the king-safety test runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfCheckPolicy {
    Enforce,
    Skip,
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        enumerate_legal_moves(board, color)
    }
}

/// True when `mv` matches the moving piece's pattern and keeps its king safe.
///
/// An empty source square is never a legal move.
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    let mut scratch = board.clone();
    is_legal_move_in_place(&mut scratch, mv)
}

fn is_legal_move_in_place(board: &mut Board, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    matches_movement_pattern(board, mv)
        && !would_leave_king_in_check(board, mv, piece.color, SelfCheckPolicy::Enforce)
}

/// Applies `mv` hypothetically and reports whether `mover`'s king is attacked.
///
/// `board` is identical to its input state when this returns or unwinds.
pub fn would_leave_king_in_check(
    board: &mut Board,
    mv: Move,
    mover: Color,
    policy: SelfCheckPolicy,
) -> bool {
    if policy == SelfCheckPolicy::Skip {
        return false;
    }
    let trial = HypotheticalMove::apply(board, mv);
    is_king_in_check(&trial, mover)
}

/// Every legal move for `color`, source-major then destination-major in
/// row-major board order.
pub fn enumerate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut scratch = board.clone();
    let mut legal = Vec::<Move>::with_capacity(64);

    for (from, _) in board.pieces_of(color) {
        for to in Position::all() {
            let mv = Move::new(from, to);
            if is_legal_move_in_place(&mut scratch, mv) {
                legal.push(mv);
            }
        }
    }

    legal
}

/// Legal destinations of the piece standing on `from`.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    let mut scratch = board.clone();
    Position::all()
        .filter(|to| is_legal_move_in_place(&mut scratch, Move::new(from, *to)))
        .collect()
}
