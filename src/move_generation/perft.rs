use std::panic;
use std::sync::Arc;
use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    perft_single_thread(generator, board, color, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, color, depth, &mut total);
    total
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = generator.generate_legal_moves(board, color);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut scratch = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let undo = apply_move(&mut scratch, mv);
            count_leaf_or_recurse(
                generator_ref.as_ref(),
                &mut scratch,
                &undo,
                color,
                depth,
                &mut local,
            );
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
    total
}

/// Leaf node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut scratch = board.clone();
    generator
        .generate_legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            let undo = apply_move(&mut scratch, mv);
            count_leaf_or_recurse(generator, &mut scratch, &undo, color, depth, &mut local);
            undo_move(&mut scratch, undo);
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse(
    generator: &(impl MoveGenerator + ?Sized),
    board: &mut Board,
    color: Color,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    for mv in generator.generate_legal_moves(board, color) {
        let undo = apply_move(board, mv);
        count_leaf_or_recurse(generator, board, &undo, color, remaining, counts);
        undo_move(board, undo);
    }
}

// `board` already has the move in `undo` applied; `remaining` counts that move.
fn count_leaf_or_recurse(
    generator: &(impl MoveGenerator + ?Sized),
    board: &mut Board,
    undo: &UndoState,
    mover: Color,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    let defender = mover.opposite();
    if remaining > 1 {
        perft_recurse(generator, board, defender, remaining - 1, counts);
        return;
    }

    counts.nodes += 1;
    if undo.captured_piece.is_some() {
        counts.captures += 1;
    }
    if is_king_in_check(board, defender) {
        counts.checks += 1;
        if generator.generate_legal_moves(board, defender).is_empty() {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::utils::placement_parser::parse_position;

    struct MockMoveGenerator;

    // Every piece of the side to move may step one square toward row 0; enough
    // to drive the counters without real chess rules.
    impl MoveGenerator for MockMoveGenerator {
        fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
            board
                .pieces_of(color)
                .filter_map(|(from, _)| from.offset(-1, 0).map(|to| Move::new(from, to)))
                .filter(|mv| board.is_empty_at(mv.to))
                .collect()
        }
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&LegalMoveGenerator, &Board::new_game(), Color::White, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
        assert!(perft_divide(&LegalMoveGenerator, &Board::new_game(), Color::White, 0).is_empty());
    }

    #[test]
    fn perft_accepts_any_generator() {
        let mut board = Board::new_empty();
        board.set_piece(Position::new(7, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set_piece(Position::new(7, 7), Some(Piece::new(Color::Black, PieceKind::Rook)));

        // Each side has one forward step per ply.
        assert_eq!(perft(&MockMoveGenerator, &board, Color::White, 3).nodes, 1);
        board.set_piece(Position::new(0, 7), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(perft(&MockMoveGenerator, &board, Color::Black, 2).nodes, 1);
    }

    #[test]
    fn starting_position_node_counts() {
        let board = Board::new_game();
        let generator = LegalMoveGenerator;

        assert_eq!(perft(&generator, &board, Color::White, 1).nodes, 20);
        assert_eq!(perft(&generator, &board, Color::White, 2).nodes, 400);

        let depth3 = perft(&generator, &board, Color::White, 3);
        assert_eq!(
            depth3,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn multi_threaded_and_divide_agree_with_single_thread() {
        let board = Board::new_game();
        let single = perft(&LegalMoveGenerator, &board, Color::White, 3);
        let threaded = perft_multi_threaded(Arc::new(LegalMoveGenerator), &board, Color::White, 3);
        assert_eq!(single, threaded);

        let divided = perft_divide(&LegalMoveGenerator, &board, Color::White, 3);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 8902);
    }

    #[test]
    fn mate_in_one_is_counted() {
        // White to move; Qh5xf7 is mate against the scholar's setup.
        let (board, side) =
            parse_position("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w")
                .expect("position should parse");
        let counts = perft(&LegalMoveGenerator, &board, side, 1);
        assert!(counts.checkmates >= 1);
        assert!(counts.checks >= counts.checkmates);
    }
}
