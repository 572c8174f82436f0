//! Builder for constructing calculator engines.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::engine::CalculatorEngine;

/// Builder for constructing engines with a fluent API.
///
/// Unset options keep the [`EngineConfig`] defaults.
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from TOML.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how many characters the display shows.
    pub fn max_display_width(mut self, width: usize) -> Self {
        self.config.max_display_width = width;
        self
    }

    /// Set the text shown after an undefined calculation.
    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.error_marker = marker.into();
        self
    }

    /// Build the engine.
    /// Returns every configuration violation if the settings are invalid.
    pub fn build(self) -> Result<CalculatorEngine, BuildError> {
        CalculatorEngine::with_config(self.config)
    }
}
