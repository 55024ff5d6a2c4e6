//! Board representation.
//!
//! `Board` is a plain 8x8 mailbox grid. It is the single source of truth for
//! piece placement; turn order and selection live with the caller.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement: Black on rows 0-1, White on rows 6-7.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            let pawn = PieceKind::Pawn;
            board.set_piece(Position::new(0, col), Some(Piece::new(Color::Black, *kind)));
            board.set_piece(Position::new(1, col), Some(Piece::new(Color::Black, pawn)));
            board.set_piece(Position::new(6, col), Some(Piece::new(Color::White, pawn)));
            board.set_piece(Position::new(7, col), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row as usize][position.col as usize] = piece;
    }

    /// Removes and returns whatever occupies `position`.
    #[inline]
    pub fn take_piece(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}
