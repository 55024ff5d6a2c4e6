//! Board placement text (FEN piece-placement field) reader and writer.
//!
//! Only the placement and an optional side-to-move field are interpreted.
//! Castling, en-passant and clock fields are accepted and ignored because
//! the rules engine has no such state.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Parse a placement such as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
pub fn parse_placement(placement: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid(format!("rank {} has too many files", 8 - row)));
            }

            board.set_piece(Position::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

/// Parse a placement with an optional side to move (`w` when omitted).
pub fn parse_position(text: &str) -> ChessResult<(Board, Color)> {
    let mut parts = text.split_whitespace();
    let placement = parts
        .next()
        .ok_or_else(|| invalid("missing board layout".to_owned()))?;
    let board = parse_placement(placement)?;

    let side = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(invalid(format!("invalid side-to-move field: {other}"))),
    };

    Ok((board, side))
}

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match board.piece_at(Position::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn generate_position(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {side}", generate_placement(board))
}

fn invalid(message: String) -> ChessError {
    ChessError::InvalidPlacement(message)
}

pub fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
