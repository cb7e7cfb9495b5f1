//! Game configuration: board size and rule variant.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest accepted board side.
pub const MIN_SIZE: usize = 1;

/// Rule variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Classic rules: pieces stay until reset, a full board is a draw.
    #[default]
    Standard,
    /// Each player keeps at most `size` pieces; the oldest one vanishes
    /// when a new one would exceed that cap. There is no draw.
    Ghost,
}

/// Board size and rule variant for one game.
///
/// Changing either value means starting a new game; nothing carries over.
/// Deserialization validates, so a `GameConfig` never holds a bad size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Board side; also the per-player piece cap in ghost mode.
    size: usize,
    /// Rule variant.
    mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            mode: GameMode::Standard,
        }
    }
}

/// Unvalidated form of [`GameConfig`] as it appears in a document.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawGameConfig {
    size: usize,
    mode: GameMode,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            size: config.size,
            mode: config.mode,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.mode)
    }
}

impl GameConfig {
    /// Board sizes offered by the interactive front-end.
    pub const PRESET_SIZES: [usize; 4] = [3, 4, 5, 6];

    /// Creates a validated configuration.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize, mode: GameMode) -> Result<Self, ConfigError> {
        let config = Self { size, mode };
        config.validate()?;
        Ok(config)
    }

    /// Standard rules on a board of side `size`.
    #[track_caller]
    pub fn standard(size: usize) -> Result<Self, ConfigError> {
        Self::new(size, GameMode::Standard)
    }

    /// Ghost rules on a board of side `size`.
    #[track_caller]
    pub fn ghost(size: usize) -> Result<Self, ConfigError> {
        Self::new(size, GameMode::Ghost)
    }

    /// Number of cells on the board.
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// True when the ghost rules apply.
    pub fn is_ghost(&self) -> bool {
        self.mode == GameMode::Ghost
    }

    /// Checks the size: at least [`MIN_SIZE`], and `size²` must fit in a
    /// `usize`.
    #[track_caller]
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::new(ConfigErrorKind::SizeTooSmall(self.size)));
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::new(ConfigErrorKind::CellCountOverflow(self.size)));
        }
        Ok(())
    }

    /// Builds a configuration without validation, for exercising the
    /// checks that guard against one.
    #[cfg(test)]
    pub(crate) fn unchecked(size: usize, mode: GameMode) -> Self {
        Self { size, mode }
    }

    /// Parses and validates a TOML document.
    ///
    /// ```toml
    /// size = 4
    /// mode = "ghost"
    /// ```
    ///
    /// Missing keys take their default values.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawGameConfig = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        let config = Self::new(raw.size, raw.mode)?;
        debug!(size = config.size, mode = %config.mode, "Parsed game config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }
}

/// What went wrong with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board side below [`MIN_SIZE`].
    #[display("board size {} is below the minimum of {}", _0, MIN_SIZE)]
    SizeTooSmall(usize),
    /// Board side whose cell count `size²` overflows `usize`.
    #[display("board size {} has too many cells to address", _0)]
    CellCountOverflow(usize),
    /// Config file could not be read.
    #[display("failed to read config file: {}", _0)]
    Read(String),
    /// Config document is not valid TOML for a [`GameConfig`].
    #[display("failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// Error kind.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
