//! Core calculator types and pure logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Phase definitions via the `State` trait
//! - Input tokens and operators
//! - Calculation dispatch and rounding
//! - Display literal parsing, formatting and truncation
//!
//! Nothing here mutates shared state or performs I/O.

mod arithmetic;
mod display;
mod phase;
mod state;
mod token;

pub use arithmetic::{apply, round_to_places, Outcome, MAX_ROUNDING_PLACES};
pub use display::{format_number, parse_display, truncate};
pub use phase::Phase;
pub use state::State;
pub use token::{Operator, Token, TokenError};
