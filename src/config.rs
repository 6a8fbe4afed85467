use crate::consts;
use ratatui::layout::Size;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Dimensions of the board
    #[serde(default)]
    pub(crate) board: BoardConfig,

    /// Seed for the random number generator that places the food.  When
    /// unset, a fresh seed is drawn for every run.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("linesnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                tracing::debug!(path = %path.display(), "No configuration file; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Size of the board, walls included
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig {
    width: u16,
    height: u16,
}

impl BoardConfig {
    pub(crate) fn new(width: u16, height: u16) -> Result<BoardConfig, BoardSizeError> {
        if !(consts::MIN_BOARD_WIDTH..=consts::MAX_BOARD_WIDTH).contains(&width) {
            Err(BoardSizeError::Width(width))
        } else if !(consts::MIN_BOARD_HEIGHT..=consts::MAX_BOARD_HEIGHT).contains(&height) {
            Err(BoardSizeError::Height(height))
        } else {
            Ok(BoardConfig { width, height })
        }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: consts::DEFAULT_BOARD_SIZE.width,
            height: consts::DEFAULT_BOARD_SIZE.height,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: u16,
    height: u16,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            width: consts::DEFAULT_BOARD_SIZE.width,
            height: consts::DEFAULT_BOARD_SIZE.height,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardSizeError;

    fn try_from(value: RawBoardConfig) -> Result<BoardConfig, BoardSizeError> {
        BoardConfig::new(value.width, value.height)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardSizeError {
    #[error(
        "board width must be between {min} and {max}, got {0}",
        min = consts::MIN_BOARD_WIDTH,
        max = consts::MAX_BOARD_WIDTH
    )]
    Width(u16),
    #[error(
        "board height must be between {min} and {max}, got {0}",
        min = consts::MIN_BOARD_HEIGHT,
        max = consts::MAX_BOARD_HEIGHT
    )]
    Height(u16),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
