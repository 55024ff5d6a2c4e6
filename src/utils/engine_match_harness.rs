//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any
//! front-end. Random engines seeded per game make whole series reproducible.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_game_end, GameStatus};
use crate::rules_interface::try_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Finished(GameStatus),
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Seed for [`play_random_match`]; White uses it as is, Black a derived one.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub moves: Vec<Move>,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub unfinished: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub total_plies: u64,
    pub total_time: Duration,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} draws={} unfinished={} avg_plies={:.1} total_ms={}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.unfinished,
            avg_plies,
            self.total_time.as_millis()
        )
    }
}

const BLACK_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn play_random_match(config: &MatchConfig) -> ChessResult<MatchResult> {
    let mut white = RandomEngine::seeded(config.seed);
    let mut black = RandomEngine::seeded(config.seed ^ BLACK_SEED_SALT);
    play_engine_match(&mut white, &mut black, config)
}

/// Play a single game from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from(Board::new_game(), Color::White, engine_white, engine_black, config)
}

pub fn play_engine_match_from(
    start: Board,
    side_to_move: Color,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let started_at = Local::now();
    let started = Instant::now();
    let mut board = start;
    let mut side = side_to_move;
    let mut moves = Vec::<Move>::new();

    let outcome = loop {
        let status = evaluate_game_end(&board, side);
        if status.is_terminal() {
            break MatchOutcome::Finished(status);
        }
        if moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let engine: &mut dyn Engine = match side {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let Some(mv) = engine.choose_move(&board, side)?.best_move else {
            return Err(ChessError::Engine(format!(
                "{} returned no move in an ongoing game",
                engine.name()
            )));
        };

        (board, side) = try_move(&board, mv, side)
            .map_err(|err| ChessError::Engine(format!("{} produced {mv}: {err}", engine.name())))?;
        moves.push(mv);
    };

    debug!(?outcome, plies = moves.len(), "match finished");
    Ok(MatchResult {
        outcome,
        final_board: board,
        moves,
        started_at,
        elapsed: started.elapsed(),
    })
}

/// Random engine against random engine over several seeded games.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_match_series(config: &MatchSeriesConfig) -> ChessResult<MatchSeriesStats> {
    play_engine_match_series(
        |seed| Box::new(RandomEngine::seeded(seed)),
        |seed| Box::new(RandomEngine::seeded(seed ^ BLACK_SEED_SALT)),
        config,
    )
}

pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), &config.per_game)?
        };

        stats.total_plies += result.moves.len() as u64;
        stats.total_time += result.elapsed;

        let player_for = |color: Color| {
            if (color == Color::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };

        let mapped = match result.outcome {
            MatchOutcome::Finished(status) => match status.winner() {
                Some(color) => {
                    let player = player_for(color);
                    match player {
                        PlayerId::Player1 => stats.player1_wins += 1,
                        PlayerId::Player2 => stats.player2_wins += 1,
                    }
                    SeriesOutcome::PlayerWin { player, color }
                }
                None => {
                    stats.draws += 1;
                    SeriesOutcome::Draw
                }
            },
            MatchOutcome::MaxPlies => {
                stats.unfinished += 1;
                SeriesOutcome::Unfinished
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            started_at = %result.started_at.format("%H:%M:%S"),
            plies = result.moves.len(),
            outcome = ?mapped,
            "series game finished"
        );
    }

    Ok(stats)
}
