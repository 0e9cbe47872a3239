//! Arena configuration loaded from TOML.

use crate::agents::{Agent, AgentKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Which agent plays this seat.
    kind: AgentKind,
}

impl PlayerConfig {
    /// Builds the configured agent.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Agent> {
        self.kind.build(&self.name, seed)
    }
}

/// Settings for a series of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games in the series.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for random agents; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the board after each move. Defaults to on when a human plays.
    #[serde(default)]
    show_board: Option<bool>,

    /// Plays X and moves first.
    #[serde(default = "default_player_a")]
    player_a: PlayerConfig,

    /// Plays O.
    #[serde(default = "default_player_b")]
    player_b: PlayerConfig,
}

fn default_games() -> u32 {
    1
}

fn default_player_a() -> PlayerConfig {
    PlayerConfig::new("Player 1".to_string(), AgentKind::Human)
}

fn default_player_b() -> PlayerConfig {
    PlayerConfig::new("Random".to_string(), AgentKind::Random)
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed: None,
            show_board: None,
            player_a: default_player_a(),
            player_b: default_player_b(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            player_a = %config.player_a.name,
            player_b = %config.player_b.name,
            games = config.games,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Replaces player A's agent kind.
    pub fn with_player_a_kind(mut self, kind: AgentKind) -> Self {
        self.player_a.kind = kind;
        self
    }

    /// Replaces player B's agent kind.
    pub fn with_player_b_kind(mut self, kind: AgentKind) -> Self {
        self.player_b.kind = kind;
        self
    }

    /// Replaces the number of games.
    ///
    /// # Errors
    ///
    /// Rejects a series of zero games.
    pub fn with_games(mut self, games: u32) -> Result<Self, ConfigError> {
        self.games = games;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether boards should be printed during play.
    pub fn should_show_board(&self) -> bool {
        self.show_board
            .unwrap_or(self.player_a.kind.is_human() || self.player_b.kind.is_human())
    }

    /// Seed for each seat, distinct so two random agents do not mirror.
    pub fn seat_seeds(&self) -> (Option<u64>, Option<u64>) {
        (self.seed, self.seed.map(|s| s.wrapping_add(1)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
