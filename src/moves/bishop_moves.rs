use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{destination_open, is_path_blocked};

pub fn bishop_pattern(board: &Board, mv: Move, color: Color) -> bool {
    let (dr, dc) = mv.delta();
    dr != 0
        && dr.abs() == dc.abs()
        && !is_path_blocked(board, mv.from, mv.to)
        && destination_open(board, mv.to, color)
}

#[cfg(test)]
mod tests {
    use super::bishop_pattern;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_moves_diagonally_only() {
        let mut board = Board::new_empty();
        let c1 = Position::new(7, 2);
        board.set_piece(c1, Some(Piece::new(Color::White, PieceKind::Bishop)));

        assert!(bishop_pattern(&board, Move::new(c1, Position::new(2, 7)), Color::White));
        assert!(!bishop_pattern(&board, Move::new(c1, Position::new(4, 2)), Color::White));
        assert!(!bishop_pattern(&board, Move::new(c1, c1), Color::White));
    }
}
