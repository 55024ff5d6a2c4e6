//! Line-oriented front-end and command loop.
//!
//! Reads commands or moves, forwards them to the `GameController`, prints
//! the board and status after every change, and lets the engine reply after
//! the configured pause.

use std::io::{self, BufRead, Write};
use std::thread;

use tracing::{info, warn};

use crate::controller::game_config::GameConfig;
use crate::controller::game_controller::{GameController, SelectionOutcome};
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::utils::algebraic::{algebraic_to_position, move_to_long_algebraic, parse_long_algebraic};
use crate::utils::render_game_state::render_board;

const HELP_TEXT: &str = "\
commands:
  e2e4 | e2 e4   play a move
  select e2      click a square (select, reselect, deselect or move)
  moves          list legal moves for the side to move
  board          print the board
  new            start a new game
  help           show this text
  quit           leave";

pub fn run_stdio_loop(config: GameConfig, start: Option<(Board, Color)>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TextSession::new(config);

    writeln!(
        stdout,
        "parlour chess, session started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    if let Some((board, side)) = start {
        session.controller.load_position(board, side);
    }
    session.print_board(&mut stdout)?;
    session.reply_if_engine_to_move(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextSession {
    controller: GameController,
    config: GameConfig,
}

impl TextSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            controller: GameController::new(&config),
            config,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GameController {
        &mut self.controller
    }

    /// Handles one input line; returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => self.print_board(out)?,
            "new" => {
                self.controller.reset();
                self.print_board(out)?;
                self.reply_if_engine_to_move(out)?;
            }
            "moves" => {
                let moves: Vec<String> = self
                    .controller
                    .legal_moves()
                    .into_iter()
                    .map(move_to_long_algebraic)
                    .collect();
                writeln!(out, "{} legal moves: {}", moves.len(), moves.join(" "))?;
            }
            "select" => match parts.next().map(algebraic_to_position) {
                Some(Ok(position)) => {
                    let outcome = self.controller.select_square(position);
                    self.report_selection(outcome, out)?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "error: select needs a square, e.g. select e2")?,
            },
            _ => match parse_long_algebraic(trimmed) {
                Ok(mv) => match self.controller.submit_move(mv) {
                    Ok(()) => {
                        self.print_board(out)?;
                        self.reply_if_engine_to_move(out)?;
                    }
                    Err(err) => writeln!(out, "rejected: {err}")?,
                },
                Err(_) => writeln!(out, "unknown command '{trimmed}', type help")?,
            },
        }

        Ok(false)
    }

    fn report_selection(
        &mut self,
        outcome: SelectionOutcome,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match outcome {
            SelectionOutcome::Ignored => writeln!(out, "nothing to select there")?,
            SelectionOutcome::Selected(from) => {
                self.print_board(out)?;
                let targets: Vec<String> = legal_destinations(self.controller.board(), from)
                    .into_iter()
                    .map(|to| to.to_string())
                    .collect();
                writeln!(out, "{from} can reach: {}", targets.join(" "))?;
            }
            SelectionOutcome::Deselected => self.print_board(out)?,
            SelectionOutcome::Moved(_) => {
                self.print_board(out)?;
                self.reply_if_engine_to_move(out)?;
            }
            SelectionOutcome::Rejected(err) => writeln!(out, "rejected: {err}")?,
        }
        Ok(())
    }

    fn reply_if_engine_to_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.controller.is_game_over() || !self.controller.is_ai_turn() {
            return Ok(());
        }

        if !self.config.ai_delay.is_zero() {
            out.flush()?;
            thread::sleep(self.config.ai_delay);
        }

        match self.controller.ai_move() {
            Ok(Some(mv)) => {
                info!(%mv, "engine replied");
                writeln!(out, "AI plays {}", move_to_long_algebraic(mv))?;
                self.print_board(out)?;
            }
            Ok(None) => writeln!(out, "{}", self.controller.status_message())?,
            Err(err) => {
                warn!(%err, "engine failed to move");
                writeln!(out, "error: {err}")?;
            }
        }
        Ok(())
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_board(self.controller.board(), self.controller.selected())
        )?;
        if self.controller.in_check() && !self.controller.is_game_over() {
            writeln!(out, "Check!")?;
        }
        writeln!(out, "{}", self.controller.status_message())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::controller::game_config::PlayMode;
    use crate::game_state::game_status::GameStatus;

    fn session(play_mode: PlayMode) -> TextSession {
        TextSession::new(GameConfig {
            play_mode,
            ai_delay: Duration::ZERO,
            seed: Some(11),
            ..GameConfig::default()
        })
    }

    fn run(session: &mut TextSession, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = session
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (quit, String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn human_move_gets_an_engine_reply() {
        let mut s = session(PlayMode::default());
        let (quit, text) = run(&mut s, "e2e4");
        assert!(!quit);
        assert!(text.contains("AI plays"), "{text}");
        assert!(text.contains("Your move (White)"), "{text}");
        assert_eq!(s.controller().side_to_move(), Color::White);
    }

    #[test]
    fn hot_seat_fools_mate_through_commands() {
        let mut s = session(PlayMode::HotSeat);
        for line in ["f2f3", "e7 e5", "g2g4"] {
            run(&mut s, line);
        }
        let (_, text) = run(&mut s, "select d8");
        assert!(text.contains("d8 can reach: e7 f6 g5 h4"), "{text}");
        let (_, text) = run(&mut s, "select h4");
        assert!(text.contains("White is checkmated! Black wins!"), "{text}");
        assert_eq!(
            s.controller().status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );

        let (_, text) = run(&mut s, "a2a3");
        assert!(text.contains("rejected: the game is already over"), "{text}");
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut s = session(PlayMode::HotSeat);
        let (_, text) = run(&mut s, "e2e5");
        assert!(text.contains("rejected: illegal move: e2e5"), "{text}");
        let (_, text) = run(&mut s, "castle");
        assert!(text.contains("unknown command"), "{text}");
        let (_, text) = run(&mut s, "select z9");
        assert!(text.starts_with("error:"), "{text}");
        let (_, text) = run(&mut s, "moves");
        assert!(text.starts_with("20 legal moves:"), "{text}");
        let (quit, _) = run(&mut s, "quit");
        assert!(quit);
    }

    #[test]
    fn new_game_with_engine_on_white_replies_immediately() {
        let mut s = session(PlayMode::VsAi {
            ai_color: Color::White,
        });
        let (_, text) = run(&mut s, "new");
        assert!(text.contains("AI plays"), "{text}");
        assert_eq!(s.controller().side_to_move(), Color::Black);
        s.controller_mut().reset();
        assert_eq!(s.controller().side_to_move(), Color::White);
    }
}
