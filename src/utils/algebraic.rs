//! Conversions between board positions and algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is the a-file, so `e2` is `(6, 4)`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Move, Position};

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "expected two characters, got '{square}'"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid file '{}'",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid rank '{}'",
            rank as char
        )));
    }

    Ok(Position::new(b'8' - rank, file - b'a'))
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.col);
    let rank_char = char::from(b'8' - position.row);
    format!("{file_char}{rank_char}")
}

/// Parse "e2e4" or "e2 e4" into a move.
pub fn parse_long_algebraic(text: &str) -> ChessResult<Move> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(format!(
            "expected a move like e2e4, got '{text}'"
        )));
    }

    let from = algebraic_to_position(&compact[0..2])?;
    let to = algebraic_to_position(&compact[2..4])?;
    Ok(Move::new(from, to))
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}
