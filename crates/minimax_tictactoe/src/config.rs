//! Game configuration loaded from TOML.

use crate::{MAX_SIDE, MIN_SIDE, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the computer picks its move on an empty board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opening {
    /// A uniformly random cell.
    #[default]
    Random,
    /// Run the full search, as for any other position.
    Search,
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length.
    side: usize,

    /// Who moves first in a fresh game.
    first: Mark,

    /// Computer behaviour on an empty board.
    opening: Opening,

    /// Seed for the random opening; entropy when unset.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Search node cap; unlimited when unset.
    #[setters(strip_option)]
    max_nodes: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: MIN_SIDE,
            first: Mark::Computer,
            opening: Opening::Random,
            seed: None,
            max_nodes: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(side = config.side, first = %config.first, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side < MIN_SIDE {
            return Err(ConfigError::new(format!(
                "side must be at least {}, got {}",
                MIN_SIDE, self.side
            )));
        }
        if self.side > MAX_SIDE {
            return Err(ConfigError::new(format!(
                "side must be at most {}, got {}",
                MAX_SIDE, self.side
            )));
        }
        if self.max_nodes == Some(0) {
            return Err(ConfigError::new("max_nodes must be positive"));
        }
        Ok(())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
