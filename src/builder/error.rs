//! Build errors for the engine builder.

use crate::config::error::format_violations;
use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid engine configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
