//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::core::GameConfig;
use crate::types::FRAME_MS;

pub const ENV_BOARD_WIDTH: &str = "BLOCKFALL_BOARD_WIDTH";
pub const ENV_BOARD_HEIGHT: &str = "BLOCKFALL_BOARD_HEIGHT";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Loop cadence in milliseconds
    pub frame_ms: u32,
    /// Tracing output file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        if let Some(width) = parse_opt::<u8>(ENV_BOARD_WIDTH, get(ENV_BOARD_WIDTH))? {
            config.game.width = width;
        }
        if let Some(height) = parse_opt::<u8>(ENV_BOARD_HEIGHT, get(ENV_BOARD_HEIGHT))? {
            config.game.height = height;
        }
        config.game.seed = parse_opt::<u64>(ENV_SEED, get(ENV_SEED))?;
        if let Some(frame_ms) = parse_opt::<u32>(ENV_FRAME_MS, get(ENV_FRAME_MS))? {
            if frame_ms == 0 {
                bail!("invalid {ENV_FRAME_MS}: must be at least 1");
            }
            config.frame_ms = frame_ms;
        }
        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        config.game.validate().context("invalid board size")?;
        Ok(config)
    }
}

fn parse_opt<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|s| s.parse::<T>().with_context(|| format!("invalid {key}: {s:?}")))
        .transpose()
}
