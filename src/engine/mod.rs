//! The calculator engine and its imperative shell.
//!
//! - [`CalculatorEngine`] owns a [`CalculatorState`] and advances it one
//!   token at a time, returning the text to display.
//! - [`Session`] wires an engine to a [`DisplaySink`] so every update is
//!   pushed out as it happens.

mod machine;
mod session;

pub use machine::{CalculatorEngine, CalculatorState};
pub use session::{DisplaySink, Frame, Recorder, Session};
