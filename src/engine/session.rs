//! Imperative shell around the engine: pushes every display update to a sink.

use super::machine::CalculatorEngine;
use crate::core::{Phase, Token, TokenError};
use serde::Serialize;

/// Receiver of display updates.
///
/// Implemented for any `FnMut(&str)` closure and for [`Recorder`].
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

impl<F: FnMut(&str)> DisplaySink for F {
    fn show(&mut self, text: &str) {
        self(text)
    }
}

/// Sink that keeps every frame it was shown, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    frames: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySink for Recorder {
    fn show(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

/// One handled token and what it left on screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub token: String,
    pub display: String,
    pub phase: Phase,
}

/// An engine wired to a display sink.
///
/// The sink sees the initial `0` on construction and one update per token.
///
/// # Example
///
/// ```rust
/// use keypad::engine::{CalculatorEngine, Recorder, Session};
///
/// let mut session = Session::new(CalculatorEngine::new(), Recorder::new());
/// for input in ["5", "/", "0", "=", "7"] {
///     session.press_str(input).unwrap();
/// }
/// assert_eq!(session.sink().frames(), ["0", "5", "5", "0", "Error", "7"]);
/// ```
pub struct Session<D: DisplaySink> {
    engine: CalculatorEngine,
    sink: D,
}

impl<D: DisplaySink> Session<D> {
    pub fn new(engine: CalculatorEngine, mut sink: D) -> Self {
        sink.show(engine.display());
        Self { engine, sink }
    }

    /// Handle one token and forward the new display to the sink.
    pub fn press(&mut self, token: Token) -> Frame {
        let display = self.engine.handle(token);
        self.sink.show(&display);
        Frame {
            token: token.to_string(),
            display,
            phase: self.engine.phase(),
        }
    }

    /// Parse raw input text, then [`press`](Self::press) it.
    ///
    /// Unrecognized text leaves the engine and the sink untouched.
    pub fn press_str(&mut self, input: &str) -> Result<Frame, TokenError> {
        let token = input.parse::<Token>()?;
        Ok(self.press(token))
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_parts(self) -> (CalculatorEngine, D) {
        (self.engine, self.sink)
    }
}
