//! Status text templates.

use super::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Placeholder replaced by the mark in every template.
pub const PLAYER_PLACEHOLDER: &str = "{player}";

/// Templates used to render status text for a presentation layer.
///
/// ```toml
/// turn = "{player} to move"
/// won = "{player} wins"
/// draw = "Nobody wins"
/// ```
///
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Shown while the game is in progress.
    #[serde(default = "default_turn")]
    turn: String,

    /// Shown once a mark has won.
    #[serde(default = "default_won")]
    won: String,

    /// Shown once the board fills with no winner.
    #[serde(default = "default_draw")]
    draw: String,
}

fn default_turn() -> String {
    "It's {player}'s turn".to_string()
}

fn default_won() -> String {
    "Player {player} has won!".to_string()
}

fn default_draw() -> String {
    "Game ended in a draw!".to_string()
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            turn: default_turn(),
            won: default_won(),
            draw: default_draw(),
        }
    }
}

impl MessageConfig {
    /// Creates a configuration from explicit templates.
    pub fn new(turn: impl Into<String>, won: impl Into<String>, draw: impl Into<String>) -> Self {
        Self {
            turn: turn.into(),
            won: won.into(),
            draw: draw.into(),
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading message config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!("Message config loaded");
        Ok(config)
    }

    /// Turn text for `mark`.
    pub fn turn_text(&self, mark: Mark) -> String {
        fill(&self.turn, mark)
    }

    /// Win text for `mark`.
    pub fn won_text(&self, mark: Mark) -> String {
        fill(&self.won, mark)
    }

    /// Draw text.
    pub fn draw_text(&self) -> String {
        self.draw.clone()
    }
}

fn fill(template: &str, mark: Mark) -> String {
    template.replace(PLAYER_PLACEHOLDER, &mark.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_texts() {
        let config = MessageConfig::default();
        assert_eq!(config.turn_text(Mark::X), "It's X's turn");
        assert_eq!(config.won_text(Mark::O), "Player O has won!");
        assert_eq!(config.draw_text(), "Game ended in a draw!");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MessageConfig::from_toml_str(r#"won = "{player} takes it""#)
            .expect("valid toml");
        assert_eq!(config.won_text(Mark::X), "X takes it");
        assert_eq!(config.turn(), &default_turn());
        assert_eq!(config.draw(), &default_draw());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = MessageConfig::from_toml_str("turn = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("message_config.rs"));
    }
}
