//! Configuration for the half-precision engine.
//!
//! This module defines the configuration structures used to parameterize a
//! [`HalfFpu`](crate::HalfFpu). It provides:
//! 1. **Defaults:** Baseline engine settings used when a key is absent.
//! 2. **Structures:** The root [`Config`] and its [`RoundingConfig`] section.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Configuration is supplied as JSON (from a file or the CLI) or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::error::ConfigError;
use crate::engine::rounding_modes::RoundingMode;

/// Default configuration constants for the engine.
///
/// These values apply when not explicitly overridden in a configuration file.
mod defaults {
    use crate::engine::rounding_modes::RoundingMode;

    /// Rounding direction of a fresh context (IEEE 754 default).
    pub const ROUNDING_MODE: RoundingMode = RoundingMode::NearestEven;
}

/// Root configuration structure for the engine.
///
/// Every section is optional; missing sections and keys take their defaults.
/// Unknown keys are rejected.
///
/// # Example JSON
///
/// ```
/// use halfsoft_core::{Config, RoundingMode};
///
/// let json = r#"{ "rounding": { "mode": "toward-zero" } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.rounding.mode, RoundingMode::TowardZero);
///
/// let short = Config::from_json(r#"{ "rounding": { "mode": "rup" } }"#).unwrap();
/// assert_eq!(short.rounding.mode, RoundingMode::TowardPositive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rounding behaviour
    pub rounding: RoundingConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed, names an unknown key,
    /// or names an unknown rounding mode.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or [`ConfigError::Parse`]
    /// if its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), mode = %config.rounding.mode, "loaded configuration");
        Ok(config)
    }
}

/// Rounding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundingConfig {
    /// Rounding direction applied by every rounding operation
    #[serde(default = "RoundingConfig::default_mode")]
    pub mode: RoundingMode,
}

impl RoundingConfig {
    /// Returns the default rounding direction.
    const fn default_mode() -> RoundingMode {
        defaults::ROUNDING_MODE
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            mode: defaults::ROUNDING_MODE,
        }
    }
}
