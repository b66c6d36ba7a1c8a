use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Draw thresholds and limits for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies without a capture or pawn move before the game is drawn.
    pub fifty_move_limit: u32,
    /// Occurrences of one position (side to move included) that draw.
    pub repetition_limit: u32,
    /// Hard cap on plies; reaching it ends the game as a draw.
    pub max_plies: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fifty_move_limit: 50,
            repetition_limit: 3,
            max_plies: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
