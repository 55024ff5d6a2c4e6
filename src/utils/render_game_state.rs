//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the text front-end, tests and
//! diagnostics.

use crate::game_state::chess_types::*;

/// Render the board with rank 8 at the top and optional highlighted square.
pub fn render_board(board: &Board, highlight: Option<Position>) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let pos = Position::new(row, col);
            let glyph = board.piece_at(pos).map(piece_to_unicode).unwrap_or('·');
            if highlight == Some(pos) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(glyph);
                if col < 7 && highlight != Some(Position::new(row, col + 1)) {
                    out.push(' ');
                }
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_types::*;

    #[test]
    fn renders_starting_board_with_black_on_top() {
        let rendered = render_board(&Board::new_game(), None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn highlight_brackets_selected_square() {
        let rendered = render_board(&Board::new_game(), Some(Position::new(6, 4)));
        let line = rendered.lines().nth(7).expect("rank 2 line should exist");
        assert_eq!(line, "2 ♙ ♙ ♙ ♙[♙]♙ ♙ ♙ 2");
    }
}
