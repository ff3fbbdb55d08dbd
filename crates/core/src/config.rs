//! Session configuration for the game engine.

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Reasons a [`GameConfig`] is rejected
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("board width {0} is outside {min}..={max}", min = MIN_BOARD_DIM, max = MAX_BOARD_DIM)]
    Width(u8),
    #[error("board height {0} is outside {min}..={max}", min = MIN_BOARD_DIM, max = MAX_BOARD_DIM)]
    Height(u8),
}

/// Engine settings fixed for the lifetime of a session (restarts keep them)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Piece generator seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Default board with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check that the board dimensions are supported
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_BOARD_DIM..=MAX_BOARD_DIM;
        if !range.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !range.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: None,
        }
    }
}
