//! Keypad: a pure functional four-function calculator
//!
//! Keypad models the input logic of a handheld calculator as a small state
//! machine. The core is pure: tokens go in, a display string comes out.
//! Delivering tokens and drawing the display are left to the caller.
//!
//! # Core Concepts
//!
//! - **Tokens**: digits, the decimal point, `+ - * /`, equals and clear
//! - **Engine**: owns the calculator state and handles one token at a time
//! - **Phases**: `Idle`, `OperatorPending`, `Accumulating` and `Error`,
//!   derived from the state via the `State` trait
//! - **Sessions**: an engine wired to a display sink
//!
//! # Example
//!
//! ```rust
//! use keypad::core::{Operator, Phase, Token};
//! use keypad::engine::CalculatorEngine;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.handle(Token::Digit(9));
//! engine.handle(Token::Operator(Operator::Subtract));
//! engine.handle(Token::Digit(4));
//!
//! assert_eq!(engine.handle(Token::Equals), "5");
//! assert_eq!(engine.handle(Token::Equals), "1");
//! assert_eq!(engine.phase(), Phase::OperatorPending);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod logging;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use config::EngineConfig;
pub use self::core::{Operator, Phase, State, Token};
pub use engine::{CalculatorEngine, CalculatorState, DisplaySink, Session};
