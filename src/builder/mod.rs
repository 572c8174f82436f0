//! Builder API for ergonomic engine construction.
//!
//! This module provides a fluent builder for engines and the
//! [`state_enum!`](crate::state_enum) macro used to declare phases.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;
