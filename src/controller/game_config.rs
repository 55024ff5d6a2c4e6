//! Game configuration.
//!
//! Built by the command-line front-end from its arguments; a few values can
//! also be overridden from the environment so scripted runs stay
//! reproducible without extra flags.

use std::time::Duration;

use tracing::warn;

use crate::game_state::chess_types::Color;

pub const SEED_ENV_VAR: &str = "PARLOUR_CHESS_SEED";
pub const AI_DELAY_ENV_VAR: &str = "PARLOUR_CHESS_AI_DELAY_MS";

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// One human against the random engine playing `ai_color`.
    VsAi { ai_color: Color },
    /// Two humans sharing the same input.
    HotSeat,
}

impl PlayMode {
    #[inline]
    pub fn ai_color(self) -> Option<Color> {
        match self {
            PlayMode::VsAi { ai_color } => Some(ai_color),
            PlayMode::HotSeat => None,
        }
    }
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::VsAi {
            ai_color: Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub play_mode: PlayMode,
    /// Pause between a human move and the engine's reply.
    pub ai_delay: Duration,
    /// Engine seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Ply cap for self-play games.
    pub max_plies: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_mode: PlayMode::default(),
            ai_delay: Duration::from_millis(200),
            seed: None,
            max_plies: 300,
        }
    }
}

impl GameConfig {
    /// Applies `PARLOUR_CHESS_SEED` and `PARLOUR_CHESS_AI_DELAY_MS` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Values given explicitly on the command line; applied after the
    /// environment so they always win.
    pub fn with_flag_overrides(mut self, seed: Option<u64>, ai_delay: Option<Duration>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(ai_delay) = ai_delay {
            self.ai_delay = ai_delay;
        }
        self
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(SEED_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring unparsable {SEED_ENV_VAR}"),
            }
        }

        if let Some(raw) = lookup(AI_DELAY_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.ai_delay = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "ignoring unparsable {AI_DELAY_ENV_VAR}"),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_puts_engine_on_black() {
        let config = GameConfig::default();
        assert_eq!(config.play_mode.ai_color(), Some(Color::Black));
        assert_eq!(PlayMode::HotSeat.ai_color(), None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn overrides_apply_valid_values_and_skip_invalid_ones() {
        let config = GameConfig::default().with_overrides_from(|key| match key {
            SEED_ENV_VAR => Some("1234".to_owned()),
            AI_DELAY_ENV_VAR => Some("soon".to_owned()),
            _ => None,
        });
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.ai_delay, GameConfig::default().ai_delay);

        let config = GameConfig::default().with_overrides_from(|key| match key {
            AI_DELAY_ENV_VAR => Some(" 0 ".to_owned()),
            _ => None,
        });
        assert_eq!(config.ai_delay, Duration::ZERO);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn command_line_values_beat_the_environment() {
        let config = GameConfig::default()
            .with_overrides_from(|key| match key {
                SEED_ENV_VAR => Some("1234".to_owned()),
                AI_DELAY_ENV_VAR => Some("900".to_owned()),
                _ => None,
            })
            .with_flag_overrides(Some(7), Some(Duration::from_millis(25)));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ai_delay, Duration::from_millis(25));

        let untouched = config.clone().with_flag_overrides(None, None);
        assert_eq!(untouched, config);
    }
}
