//! King location and attack detection.
//!
//! Attacks are found by asking whether any opposing piece's raw movement
//! pattern reaches the target square. King safety of the attacker is never
//! considered here.

use crate::game_state::chess_types::*;
use crate::moves::movement_patterns::matches_movement_pattern;

/// First king of `color` in row-major order, or `None` if it has been captured.
#[inline]
pub fn find_king(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_pos) = find_king(board, color) else {
        return false;
    };
    is_square_attacked(board, king_pos, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| matches_movement_pattern(board, Move::new(from, square)))
}

/// Every `attacker_color` piece whose movement pattern reaches `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| matches_movement_pattern(board, Move::new(*from, square)))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement_parser::parse_placement;

    #[test]
    fn nobody_is_in_check_at_the_start() {
        let board = Board::new_game();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert_eq!(find_king(&board, Color::White), Some(Position::new(7, 4)));
        assert_eq!(find_king(&board, Color::Black), Some(Position::new(0, 4)));
    }

    #[test]
    fn missing_king_is_tolerated() {
        let board = parse_placement("8/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert_eq!(find_king(&board, Color::Black), None);
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = parse_placement("4r3/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert!(is_king_in_check(&board, Color::White));

        let attackers = attackers_to_square(&board, Position::new(7, 4), Color::Black);
        assert_eq!(attackers, vec![(Position::new(0, 4), PieceKind::Rook)]);
    }

    #[test]
    fn blocked_rook_gives_no_check() {
        let board = parse_placement("4r3/8/8/8/4n3/8/8/4K3").expect("placement should parse");
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        let board = parse_placement("8/8/8/8/8/3p4/8/4K3").expect("placement should parse");
        assert!(!is_king_in_check(&board, Color::White));

        let board = parse_placement("8/8/8/8/8/8/3p4/4K3").expect("placement should parse");
        assert!(is_king_in_check(&board, Color::White));

        let board = parse_placement("8/8/8/8/8/8/4p3/4K3").expect("placement should parse");
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pinned_attacker_still_gives_check() {
        // The black knight is pinned to its own king by the white rook, yet it
        // still attacks the white king.
        let board = parse_placement("4k3/8/4n3/8/3K4/8/8/4R3").expect("placement should parse");
        assert!(is_king_in_check(&board, Color::White));
    }
}
