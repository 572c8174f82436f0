//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule broken by an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Display width must be at least 1")]
    ZeroDisplayWidth,

    #[error("Display width {width} exceeds the maximum of {max}")]
    DisplayTooWide { width: usize, max: usize },

    #[error("Error marker must not be empty")]
    EmptyErrorMarker,

    #[error("Error marker '{marker}' reads as a number")]
    NumericErrorMarker { marker: String },

    #[error("Error marker '{marker}' is wider than the display ({width})")]
    ErrorMarkerTooWide { marker: String, width: usize },
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

pub(crate) fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
