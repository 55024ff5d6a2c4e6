//! Raw movement patterns.
//!
//! Answers "can this piece travel from `from` to `to` on this board" without
//! any regard for the mover's own king. Attack detection is built on this
//! predicate so that it never recurses back into king-safety checks.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::king_moves::king_pattern;
use crate::moves::knight_moves::knight_pattern;
use crate::moves::pawn_moves::pawn_pattern;
use crate::moves::queen_moves::queen_pattern;
use crate::moves::rook_moves::rook_pattern;

/// Returns false for an empty source square.
pub fn matches_movement_pattern(board: &Board, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, mv, piece.color),
        PieceKind::Knight => knight_pattern(board, mv, piece.color),
        PieceKind::Bishop => bishop_pattern(board, mv, piece.color),
        PieceKind::Rook => rook_pattern(board, mv, piece.color),
        PieceKind::Queen => queen_pattern(board, mv, piece.color),
        PieceKind::King => king_pattern(board, mv, piece.color),
    }
}

#[cfg(test)]
mod tests {
    use super::matches_movement_pattern;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::is_legal_move;
    use crate::utils::placement_parser::parse_placement;

    #[test]
    fn empty_source_never_matches() {
        let board = Board::new_game();
        let mv = Move::new(Position::new(4, 4), Position::new(3, 4));
        assert!(!matches_movement_pattern(&board, mv));
    }

    #[test]
    fn no_piece_may_land_on_a_friendly_piece() {
        let placements = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR",
            "4r1k1/8/8/8/8/8/4B3/4K3",
            "k7/8/8/3q4/8/8/3P4/3K4",
        ];
        for placement in placements {
            let board = parse_placement(placement).expect("placement should parse");
            for (from, mover) in board.pieces() {
                for (to, _) in board.pieces_of(mover.color) {
                    let mv = Move::new(from, to);
                    assert!(
                        !matches_movement_pattern(&board, mv),
                        "{placement}: {mv} matched onto a friendly piece"
                    );
                    assert!(
                        !is_legal_move(&board, mv),
                        "{placement}: {mv} accepted onto a friendly piece"
                    );
                }
            }
        }
    }

    #[test]
    fn null_move_never_matches() {
        let mut board = Board::new_empty();
        let d4 = Position::new(4, 3);
        for kind in ALL_PIECE_KINDS {
            board.set_piece(d4, Some(Piece::new(Color::White, kind)));
            assert!(!matches_movement_pattern(&board, Move::new(d4, d4)), "{kind:?}");
        }
    }
}
