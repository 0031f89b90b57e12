//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_core::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display names for the two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerNames([String; 2]);

impl PlayerNames {
    /// Creates names for players one and two.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self([one.into(), two.into()])
    }

    /// Name shown for `player`.
    pub fn name(&self, player: Player) -> &str {
        &self.0[player.seat()]
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(Player::One.to_string(), Player::Two.to_string())
    }
}

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Clear the terminal before each board.
    clear_screen: bool,

    /// Wait for Enter after the result is shown.
    pause_on_exit: bool,

    /// File receiving tracing output.
    log_file: PathBuf,

    /// Names shown in the header, prompts and result.
    player_names: PlayerNames,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_on_exit: false,
            log_file: PathBuf::from("noughts.log"),
            player_names: PlayerNames::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(clear_screen = config.clear_screen, "Config loaded successfully");
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
