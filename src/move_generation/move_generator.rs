use crate::game_state::chess_types::*;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move>;
}
