//! Game setup loading from TOML.
//!
//! A setup file names the starting layout and the side to move:
//!
//! ```toml
//! turn = "BLACK"
//! layout = """
//! | | | | |k| | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | |K| | | |
//! """
//! ```
//!
//! Both keys are optional; an empty file describes a standard new game.

use crate::{BoardError, Game};
use arbiter_core::{Color, Layout, LayoutError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a game setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the setup file from disk.
    #[error("failed to read game setup: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the setup file as valid TOML.
    #[error("failed to parse game setup: {0}")]
    Parse(#[from] toml::de::Error),
    /// The layout text is malformed.
    #[error("invalid layout in game setup: {0}")]
    Layout(#[from] LayoutError),
    /// The layout does not describe a playable board.
    #[error("invalid board in game setup: {0}")]
    Board(#[from] BoardError),
}

/// Starting setup for a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Text layout of the starting board. Defaults to the standard layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// The side to move first. Defaults to White.
    #[serde(default = "default_turn")]
    pub turn: Color,
}

fn default_turn() -> Color {
    Color::White
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            layout: None,
            turn: default_turn(),
        }
    }
}

impl GameConfig {
    /// Parses a setup from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a setup file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Game {
    /// Creates a game from a setup.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut game = Game::new();
        if let Some(text) = &config.layout {
            let layout = Layout::parse(text)?;
            game.set_board(crate::Board::from_layout(&layout))?;
        }
        game.set_team_turn(config.turn);
        Ok(game)
    }
}
