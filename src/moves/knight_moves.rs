use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::destination_open;

pub fn knight_pattern(board: &Board, mv: Move, color: Color) -> bool {
    let (dr, dc) = mv.delta();
    let jump = matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2));
    jump && destination_open(board, mv.to, color)
}

#[cfg(test)]
mod tests {
    use super::knight_pattern;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_from_d4_reaches_eight_squares() {
        let mut board = Board::new_empty();
        let d4 = Position::new(4, 3);
        board.set_piece(d4, Some(Piece::new(Color::White, PieceKind::Knight)));

        let targets = Position::all()
            .filter(|to| knight_pattern(&board, Move::new(d4, *to), Color::White))
            .count();
        assert_eq!(targets, 8);
    }

    #[test]
    fn knight_jumps_over_pieces_but_not_onto_friends() {
        let board = Board::new_game();
        let g1 = Position::new(7, 6);
        assert!(knight_pattern(&board, Move::new(g1, Position::new(5, 5)), Color::White));
        assert!(!knight_pattern(&board, Move::new(g1, Position::new(6, 4)), Color::White));
    }
}
