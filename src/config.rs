//! Engine and session configuration.

use crate::tictactoe::{Minimax, Player, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game against the computer.
///
/// Loaded from TOML; every field has a default so an empty file is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark the computer plays. X moves first, so `X` means the computer opens.
    #[serde(default = "default_computer_mark")]
    computer_mark: Player,

    /// How the computer searches the game tree.
    #[serde(default)]
    strategy: Strategy,
}

fn default_computer_mark() -> Player {
    Player::O
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_computer_mark(), Strategy::default())
    }
}

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(computer_mark: Player, strategy: Strategy) -> Self {
        Self {
            computer_mark,
            strategy,
        }
    }

    /// Returns a copy with the computer playing `mark`.
    pub fn with_computer_mark(self, mark: Player) -> Self {
        Self {
            computer_mark: mark,
            ..self
        }
    }

    /// Returns a copy using `strategy`.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Mark the human plays.
    pub fn human_mark(&self) -> Player {
        self.computer_mark.opponent()
    }

    /// Search engine maximizing for the computer.
    pub fn minimax(&self) -> Minimax {
        Minimax::new(self.computer_mark, self.strategy)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            computer_mark = %config.computer_mark,
            strategy = %config.strategy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders configuration as TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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
