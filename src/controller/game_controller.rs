//! Turn-based game controller.
//!
//! Owns everything a playable game needs on top of the rules engine: the
//! board, side to move, the currently selected square, the play mode and the
//! engine that answers for the computer side. Front-ends translate their
//! input into `select_square` / `submit_move` calls and render the results.

use tracing::{debug, info};

use crate::controller::game_config::{GameConfig, PlayMode};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_game_end, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::enumerate_legal_moves;
use crate::rules_interface::try_move;

/// Result of a click on a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing happened (game over, engine's turn, or nothing selectable).
    Ignored,
    Selected(Position),
    Deselected,
    Moved(Move),
    /// The attempted move was refused; the selection is kept.
    Rejected(ChessError),
}

pub struct GameController {
    board: Board,
    side_to_move: Color,
    selected: Option<Position>,
    status: GameStatus,
    play_mode: PlayMode,
    engine: Box<dyn Engine>,
}

impl GameController {
    pub fn new(config: &GameConfig) -> Self {
        let engine: Box<dyn Engine> = match config.seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        };
        Self::with_engine(config.play_mode, engine)
    }

    pub fn with_engine(play_mode: PlayMode, engine: Box<dyn Engine>) -> Self {
        let mut controller = Self {
            board: Board::new_game(),
            side_to_move: Color::White,
            selected: None,
            status: GameStatus::Ongoing,
            play_mode,
            engine,
        };
        controller.reset();
        controller
    }

    /// Starts from an arbitrary position instead of the standard one.
    pub fn load_position(&mut self, board: Board, side_to_move: Color) {
        self.board = board;
        self.side_to_move = side_to_move;
        self.selected = None;
        self.status = evaluate_game_end(&self.board, self.side_to_move);
        self.engine.new_game();
        info!(side = %side_to_move, status = %self.status, "position loaded");
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        self.board = Board::new_game();
        self.side_to_move = Color::White;
        self.selected = None;
        self.status = GameStatus::Ongoing;
        self.engine.new_game();
        info!(mode = ?self.play_mode, engine = self.engine.name(), "new game");
    }

    /// Switching modes starts a new game.
    pub fn set_play_mode(&mut self, play_mode: PlayMode) {
        self.play_mode = play_mode;
        self.reset();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn is_ai_turn(&self) -> bool {
        self.play_mode.ai_color() == Some(self.side_to_move)
    }

    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        enumerate_legal_moves(&self.board, self.side_to_move)
    }

    /// Click handling: select, reselect, deselect, or attempt a move.
    pub fn select_square(&mut self, position: Position) -> SelectionOutcome {
        if self.is_game_over() || self.is_ai_turn() {
            return SelectionOutcome::Ignored;
        }

        let owns_target = self
            .board
            .piece_at(position)
            .is_some_and(|piece| piece.color == self.side_to_move);

        let Some(selected) = self.selected else {
            if owns_target {
                self.selected = Some(position);
                return SelectionOutcome::Selected(position);
            }
            return SelectionOutcome::Ignored;
        };

        let selection_valid = self
            .board
            .piece_at(selected)
            .is_some_and(|piece| piece.color == self.side_to_move);
        if !selection_valid || selected == position {
            self.selected = None;
            return SelectionOutcome::Deselected;
        }

        if owns_target {
            self.selected = Some(position);
            return SelectionOutcome::Selected(position);
        }

        let mv = Move::new(selected, position);
        match self.submit_move(mv) {
            Ok(()) => SelectionOutcome::Moved(mv),
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                SelectionOutcome::Rejected(err)
            }
        }
    }

    /// Plays a human move for the side to move.
    pub fn submit_move(&mut self, mv: Move) -> ChessResult<()> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(ChessError::AwaitingEngine);
        }
        self.play(mv)
    }

    /// Lets the engine move for the side to move.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn ai_move(&mut self) -> ChessResult<Option<Move>> {
        if self.is_game_over() {
            return Ok(None);
        }

        let output = self.engine.choose_move(&self.board, self.side_to_move)?;
        for line in &output.info_lines {
            debug!("{line}");
        }

        let Some(mv) = output.best_move else {
            self.status = evaluate_game_end(&self.board, self.side_to_move);
            return Ok(None);
        };

        self.play(mv).map_err(|err| {
            ChessError::Engine(format!("{} produced {mv}: {err}", self.engine.name()))
        })?;
        Ok(Some(mv))
    }

    fn play(&mut self, mv: Move) -> ChessResult<()> {
        let mover = self.side_to_move;
        let (next, side) = try_move(&self.board, mv, mover)?;
        self.board = next;
        self.side_to_move = side;
        self.selected = None;
        self.status = evaluate_game_end(&self.board, self.side_to_move);

        info!(%mover, %mv, status = %self.status, "move played");
        Ok(())
    }

    /// One-line description of whose turn it is or how the game ended.
    pub fn status_message(&self) -> String {
        let ai_color = self.play_mode.ai_color();
        match (self.status, ai_color) {
            (GameStatus::Ongoing, Some(ai)) if ai == self.side_to_move => {
                format!("AI move ({})", self.side_to_move)
            }
            (GameStatus::Ongoing, Some(_)) => format!("Your move ({})", self.side_to_move),
            (GameStatus::Ongoing, None) => format!("{}'s move", self.side_to_move),
            (GameStatus::Checkmate { winner }, Some(ai)) => {
                if winner == ai {
                    "You are checkmated! AI wins!".to_owned()
                } else {
                    "Checkmate! You win!".to_owned()
                }
            }
            (GameStatus::Checkmate { winner }, None) => {
                format!("{} is checkmated! {winner} wins!", winner.opposite())
            }
            (GameStatus::Stalemate, _) => "Stalemate! It's a draw.".to_owned(),
            (GameStatus::KingCaptured { winner }, Some(ai)) => {
                if winner == ai {
                    "AI wins!".to_owned()
                } else {
                    "You win!".to_owned()
                }
            }
            (GameStatus::KingCaptured { winner }, None) => format!("{winner} wins!"),
        }
    }
}
