use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use parlour_chess::controller::game_config::{GameConfig, PlayMode};
use parlour_chess::controller::text_session::run_stdio_loop;
use parlour_chess::game_state::chess_rules::STARTING_POSITION;
use parlour_chess::game_state::chess_types::Color;
use parlour_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use parlour_chess::move_generation::perft::{perft_divide, perft_multi_threaded};
use parlour_chess::utils::algebraic::move_to_long_algebraic;
use parlour_chess::utils::engine_match_harness::{play_match_series, MatchConfig, MatchSeriesConfig};
use parlour_chess::utils::placement_parser::parse_position;

#[derive(Debug, Parser)]
#[command(
    name = "parlour_chess",
    version,
    about = "Two-player chess rules engine with a random-move opponent"
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info" or "parlour_chess=debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Engine seed; overrides PARLOUR_CHESS_SEED.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play in the terminal against the engine or another human.
    Play {
        #[arg(long)]
        hot_seat: bool,
        #[arg(long, value_enum, default_value_t = Side::Black)]
        ai_color: Side,
        /// Start from a placement such as "k7/8/8/8/8/8/8/K6R w".
        #[arg(long)]
        position: Option<String>,
        /// Pause before the engine replies; overrides PARLOUR_CHESS_AI_DELAY_MS.
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },
    /// Random engine against random engine.
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: u16,
        #[arg(long, default_value_t = 300)]
        max_plies: u16,
    },
    /// Count legal-move tree leaves.
    Perft {
        #[arg(long, default_value_t = 3)]
        depth: u8,
        #[arg(long)]
        position: Option<String>,
        /// Print per-root-move counts as well.
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut config = GameConfig::default()
        .with_env_overrides()
        .with_flag_overrides(cli.seed, None);

    match cli.command.unwrap_or(Command::Play {
        hot_seat: false,
        ai_color: Side::Black,
        position: None,
        ai_delay_ms: None,
    }) {
        Command::Play {
            hot_seat,
            ai_color,
            position,
            ai_delay_ms,
        } => {
            config.play_mode = if hot_seat {
                PlayMode::HotSeat
            } else {
                PlayMode::VsAi {
                    ai_color: ai_color.into(),
                }
            };
            let config = config.with_flag_overrides(None, ai_delay_ms.map(Duration::from_millis));
            let start = position.as_deref().map(parse_position).transpose()?;
            info!(?config, "starting interactive session");
            run_stdio_loop(config, start)?;
        }
        Command::Selfplay { games, max_plies } => {
            config.max_plies = max_plies;
            let series = MatchSeriesConfig {
                games,
                base_seed: config.seed.unwrap_or_else(rand::random),
                per_game: MatchConfig {
                    max_plies: config.max_plies,
                    ..MatchConfig::default()
                },
            };
            info!(base_seed = series.base_seed, games, "starting self-play series");
            let stats = play_match_series(&series)?;
            println!("base_seed={} {}", series.base_seed, stats.report());
        }
        Command::Perft {
            depth,
            position,
            divide,
        } => {
            let (board, side) = parse_position(position.as_deref().unwrap_or(STARTING_POSITION))?;
            let started = Instant::now();

            if divide {
                for (mv, nodes) in perft_divide(&LegalMoveGenerator, &board, side, depth) {
                    println!("{}: {nodes}", move_to_long_algebraic(mv));
                }
            }

            let counts = perft_multi_threaded(Arc::new(LegalMoveGenerator), &board, side, depth);
            println!(
                "depth={depth} nodes={} captures={} checks={} checkmates={} time_ms={}",
                counts.nodes,
                counts.captures,
                counts.checks,
                counts.checkmates,
                started.elapsed().as_millis()
            );
        }
    }

    Ok(())
}
