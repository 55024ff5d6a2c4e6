//! Entry points for controllers driving a game.
//!
//! These wrap the rules engine in the shape a game loop wants: a fresh board,
//! a checked move that yields the next board and side to move, the legal-move
//! list for automated play, and the current game status.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_game_end, GameStatus};
use crate::move_generation::legal_move_apply::apply_move_to_copy;
use crate::move_generation::legal_move_generator::{enumerate_legal_moves, is_legal_move};

#[inline]
pub fn new_game() -> Board {
    Board::new_game()
}

/// Validates `mv` for `color` and returns the resulting board and next side.
///
/// A rejected move leaves `board` untouched.
pub fn try_move(board: &Board, mv: Move, color: Color) -> ChessResult<(Board, Color)> {
    let piece = board
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySquare { position: mv.from })?;

    if piece.color != color {
        return Err(ChessError::WrongSide {
            position: mv.from,
            expected: color,
        });
    }

    if !is_legal_move(board, mv) {
        return Err(ChessError::IllegalMove { mv });
    }

    Ok((apply_move_to_copy(board, mv), color.opposite()))
}

#[inline]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    enumerate_legal_moves(board, color)
}

#[inline]
pub fn game_status(board: &Board, color_to_move: Color) -> GameStatus {
    evaluate_game_end(board, color_to_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::algebraic::parse_long_algebraic;

    fn lan(text: &str) -> Move {
        parse_long_algebraic(text).expect("move should parse")
    }

    #[test]
    fn accepted_move_flips_side_and_moves_piece() {
        let board = new_game();
        let (next, side) = try_move(&board, lan("e2e4"), Color::White).expect("e2e4 is legal");
        assert_eq!(side, Color::Black);
        assert!(next.is_empty_at(lan("e2e4").from));
        assert_eq!(
            next.piece_at(lan("e2e4").to),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(!is_king_in_check(&next, Color::White));
    }

    #[test]
    fn rejections_leave_board_unchanged() {
        let board = new_game();

        assert_eq!(
            try_move(&board, lan("e2e5"), Color::White),
            Err(ChessError::IllegalMove { mv: lan("e2e5") })
        );
        assert_eq!(
            try_move(&board, lan("e4e5"), Color::White),
            Err(ChessError::EmptySquare {
                position: lan("e4e5").from
            })
        );
        assert_eq!(
            try_move(&board, lan("e7e5"), Color::White),
            Err(ChessError::WrongSide {
                position: lan("e7e5").from,
                expected: Color::White
            })
        );
        assert_eq!(board, new_game());
    }

    #[test]
    fn full_game_flow_reaches_checkmate() {
        let mut board = new_game();
        let mut side = Color::White;
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            assert_eq!(game_status(&board, side), GameStatus::Ongoing);
            (board, side) = try_move(&board, lan(text), side).expect("move should be legal");
        }

        assert!(legal_moves(&board, side).is_empty());
        assert_eq!(
            game_status(&board, side),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }
}
