//! Engine configuration.
//!
//! Settings can be written in TOML; missing keys fall back to the defaults
//! of a nine-character display showing `Error` on failure.
//!
//! ```toml
//! max_display_width = 9
//! error_marker = "Error"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
mod rules;

pub use error::{ConfigError, ConfigViolation};

/// Default number of characters the display can show.
pub const DEFAULT_DISPLAY_WIDTH: usize = 9;

/// Widest accepted display; f64 carries no more than 17 significant digits.
pub const MAX_DISPLAY_WIDTH: usize = 17;

/// Default text shown when a calculation is undefined.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// Tunables for a [`CalculatorEngine`](crate::engine::CalculatorEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Characters shown by the display; also the number of decimal places
    /// results are rounded to.
    pub max_display_width: usize,

    /// Sentinel shown after an undefined calculation.
    pub error_marker: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_display_width: DEFAULT_DISPLAY_WIDTH,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check every rule, reporting all violations at once.
    pub fn check(&self) -> Result<(), Vec<ConfigViolation>> {
        rules::validate(self)
    }

    /// Same as [`check`](Self::check), wrapped in a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(ConfigError::Invalid)
    }
}
