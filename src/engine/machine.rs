//! The calculator state machine.

use crate::builder::BuildError;
use crate::config::EngineConfig;
use crate::core::{
    apply, format_number, parse_display, truncate, Operator, Outcome, Phase, State, Token,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Data owned by a [`CalculatorEngine`].
///
/// The engine is the only writer; callers get read-only snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Full display literal, or the error marker. May be longer than the
    /// display; it is truncated only when rendered.
    pub display_value: String,
    /// Left operand of the pending or just-completed calculation
    pub first_operand: Option<f64>,
    /// Pending operation
    pub operator: Option<Operator>,
    /// The next digit starts a fresh number instead of extending the display
    pub awaiting_second_operand: bool,
    /// Right operand of the last `=` calculation, reused by a repeated `=`
    pub repeat_operand: Option<f64>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            operator: None,
            awaiting_second_operand: false,
            repeat_operand: None,
        }
    }
}

/// Four-function calculator driven one token at a time.
///
/// # Example
///
/// ```rust
/// use keypad::core::Token;
/// use keypad::engine::CalculatorEngine;
///
/// let mut engine = CalculatorEngine::new();
/// for input in ["3", "+", "4", "+", "5"] {
///     engine.handle(input.parse::<Token>().unwrap());
/// }
/// assert_eq!(engine.handle(Token::Equals), "12");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    config: EngineConfig,
    state: CalculatorState,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default nine-character display.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            state: CalculatorState::default(),
        }
    }

    /// Create an engine from a configuration, rejecting invalid settings.
    pub fn with_config(config: EngineConfig) -> Result<Self, BuildError> {
        config.check().map_err(BuildError::InvalidConfig)?;
        Ok(Self {
            config,
            state: CalculatorState::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Derive the current phase (pure)
    pub fn phase(&self) -> Phase {
        let state = &self.state;
        if state.display_value == self.config.error_marker {
            return Phase::Error;
        }
        match (state.operator, state.awaiting_second_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::Accumulating,
        }
    }

    /// The display text, truncated to the display width.
    pub fn display(&self) -> &str {
        truncate(&self.state.display_value, self.config.max_display_width)
    }

    /// Advance the state machine by one token and return the new display.
    ///
    /// A `Token::Digit` above nine does nothing.
    pub fn handle(&mut self, token: Token) -> String {
        let before = self.phase();

        match token {
            Token::Clear => self.reset(),
            Token::Digit(_) | Token::DecimalPoint => self.input_digit(token),
            Token::Operator(op) => self.input_operator(Some(op)),
            Token::Equals => self.input_operator(None),
        }

        let after = self.phase();
        if before != after {
            debug!(%token, from = before.name(), to = after.name(), "phase changed");
        }
        self.display().to_string()
    }

    /// Return to the power-on state.
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
    }

    fn input_digit(&mut self, token: Token) {
        let Some(c) = token.as_char() else {
            return;
        };

        // Leaving the error phase always goes through a full reset.
        if self.phase().is_error() {
            self.reset();
        }

        let state = &mut self.state;
        if state.awaiting_second_operand {
            state.display_value = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            state.awaiting_second_operand = false;
        } else if c == '.' && state.display_value.contains('.') {
            trace!("ignoring second decimal point");
        } else if c != '.' && state.display_value == "0" {
            state.display_value = c.to_string();
        } else {
            state.display_value.push(c);
        }
    }

    /// Handle an operator key, or equals when `next` is `None`.
    fn input_operator(&mut self, next: Option<Operator>) {
        if self.phase().is_error() {
            trace!("ignoring operator while the error marker is showing");
            return;
        }

        // An entry too long to be a finite f64 blocks operators until clear.
        let Some(input_value) = parse_display(&self.state.display_value) else {
            warn!(
                display = %self.state.display_value,
                "display is not a number, ignoring operator"
            );
            return;
        };

        let places = self.config.max_display_width;
        let state = &mut self.state;

        if let (Some(op), Some(_)) = (next, state.operator) {
            if state.awaiting_second_operand {
                state.operator = Some(op);
                state.repeat_operand = None;
                return;
            }
        }

        // `=` straight after an operator has no second operand to work with.
        if next.is_none()
            && state.awaiting_second_operand
            && state.operator.is_some()
            && state.repeat_operand.is_none()
        {
            trace!("ignoring equals with no second operand");
            return;
        }

        let second = match (next, state.awaiting_second_operand) {
            (None, true) => state.repeat_operand.unwrap_or(input_value),
            _ => input_value,
        };

        match state.first_operand {
            None => state.first_operand = Some(input_value),
            Some(first) => match apply(first, second, state.operator, places) {
                Outcome::Undefined => {
                    warn!(
                        first,
                        second,
                        operator = ?state.operator,
                        "calculation undefined"
                    );
                    *state = CalculatorState {
                        display_value: self.config.error_marker.clone(),
                        ..CalculatorState::default()
                    };
                    return;
                }
                Outcome::Value(result) => {
                    debug!(first, second, result, operator = ?state.operator, "calculated");
                    state.display_value = format_number(result);
                    state.first_operand = Some(result);
                    if next.is_none() {
                        state.repeat_operand = Some(second);
                    }
                }
            },
        }

        state.awaiting_second_operand = true;
        if let Some(op) = next {
            state.operator = Some(op);
            state.repeat_operand = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DISPLAY_WIDTH;

    fn press(engine: &mut CalculatorEngine, inputs: &str) -> Vec<String> {
        inputs
            .split_whitespace()
            .map(|input| engine.handle(input.parse().unwrap()))
            .collect()
    }

    fn run(inputs: &str) -> String {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, inputs).pop().unwrap()
    }

    #[test]
    fn starts_at_zero_in_idle() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.state(), &CalculatorState::default());
    }

    #[test]
    fn leading_zero_is_suppressed() {
        assert_eq!(run("0 0 7"), "7");
        assert_eq!(run("0 . 5"), "0.5");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 . 2");
        let before = engine.state().clone();
        assert_eq!(engine.handle(Token::DecimalPoint), "1.2");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn long_entry_is_truncated_only_for_display() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2 3 4 5 6 7 8 9 0 1");
        assert_eq!(engine.display(), "123456789");
        assert_eq!(engine.state().display_value, "12345678901");
    }

    #[test]
    fn decimal_point_after_operator_starts_with_zero() {
        let mut engine = CalculatorEngine::new();
        let frames = press(&mut engine, "4 * . 5 =");
        assert_eq!(frames[2], "0.");
        assert_eq!(frames[4], "2");
    }

    #[test]
    fn chaining_uses_previous_result() {
        let mut engine = CalculatorEngine::new();
        let frames = press(&mut engine, "3 + 4 + 5 =");
        assert_eq!(frames, vec!["3", "3", "4", "7", "5", "12"]);
    }

    #[test]
    fn second_operator_replaces_first() {
        assert_eq!(run("5 + - 3 ="), "2");
    }

    #[test]
    fn operator_replacement_does_not_calculate() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "8 *");
        let first = engine.state().first_operand;
        press(&mut engine, "/ +");
        assert_eq!(engine.state().first_operand, first);
        assert_eq!(engine.state().operator, Some(Operator::Add));
        assert_eq!(engine.phase(), Phase::OperatorPending);
    }

    #[test]
    fn repeated_equals_reapplies_last_operation() {
        let mut engine = CalculatorEngine::new();
        let frames = press(&mut engine, "9 - 4 = =");
        assert_eq!(frames[3], "5");
        assert_eq!(frames[4], "1");
        assert_eq!(engine.handle(Token::Equals), "-3");
    }

    #[test]
    fn equals_keeps_pending_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2 * 3 =");
        assert_eq!(engine.state().operator, Some(Operator::Multiply));
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn equals_without_operator_is_identity() {
        assert_eq!(run("4 2 ="), "42");
        assert_eq!(run("4 2 = ="), "42");

        let mut engine = CalculatorEngine::new();
        press(&mut engine, "4 2 =");
        assert_eq!(engine.state().operator, None);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn operator_after_equals_continues_from_result() {
        assert_eq!(run("9 - 4 = + 2 ="), "7");
    }

    #[test]
    fn equals_right_after_operator_changes_nothing() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5 +");
        let before = engine.state().clone();

        assert_eq!(engine.handle(Token::Equals), "5");
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.phase(), Phase::OperatorPending);
        assert_eq!(press(&mut engine, "3 =").pop().unwrap(), "8");
    }

    #[test]
    fn equals_after_replaced_operator_changes_nothing() {
        assert_eq!(run("9 - 4 = + ="), "5");
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2");
        let before = engine.state().clone();

        assert_eq!(engine.handle(Token::Digit(42)), "12");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn operators_are_ignored_when_entry_overflows() {
        let mut engine = CalculatorEngine::new();
        for _ in 0..310 {
            engine.handle(Token::Digit(9));
        }
        let before = engine.state().clone();

        assert_eq!(engine.handle(Token::Operator(Operator::Add)), "999999999");
        assert_eq!(engine.handle(Token::Equals), "999999999");
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.phase(), Phase::Idle);

        assert_eq!(engine.handle(Token::Clear), "0");
        assert_eq!(press(&mut engine, "2 + 2 =").pop().unwrap(), "4");
    }

    #[test]
    fn widest_display_calculates() {
        let config = EngineConfig {
            max_display_width: MAX_DISPLAY_WIDTH,
            error_marker: "Error".to_string(),
        };
        let mut engine = CalculatorEngine::with_config(config).unwrap();
        assert_eq!(press(&mut engine, "1 / 4 =").pop().unwrap(), "0.25");
    }

    #[test]
    fn division_by_zero_shows_error_and_clears() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(press(&mut engine, "5 / 0 =").pop().unwrap(), "Error");
        assert_eq!(engine.phase(), Phase::Error);

        let state = engine.state();
        assert_eq!(state.first_operand, None);
        assert_eq!(state.operator, None);
        assert!(!state.awaiting_second_operand);
        assert_eq!(state.repeat_operand, None);
    }

    #[test]
    fn digit_after_error_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5 / 0 =");
        assert_eq!(engine.handle(Token::Digit(7)), "7");
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.handle(Token::Equals), "7");
    }

    #[test]
    fn decimal_point_after_error_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 / 0 +");
        assert_eq!(engine.handle(Token::DecimalPoint), "0.");
    }

    #[test]
    fn operators_are_ignored_while_error_shows() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5 / 0 =");
        assert_eq!(engine.handle(Token::Operator(Operator::Add)), "Error");
        assert_eq!(engine.handle(Token::Equals), "Error");
        assert_eq!(engine.phase(), Phase::Error);
    }

    #[test]
    fn clear_resets_everything() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "9 - 4 = 3");
        assert_eq!(engine.handle(Token::Clear), "0");
        assert_eq!(engine.state(), &CalculatorState::default());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn results_are_rounded_then_truncated() {
        assert_eq!(run("2 / 3 ="), "0.6666666");
        assert_eq!(run(". 1 + . 2 ="), "0.3");
    }

    #[test]
    fn negative_results_display_with_sign() {
        assert_eq!(run("3 - 8 ="), "-5");
        assert_eq!(run("3 - 8 = * 2 ="), "-10");
    }

    #[test]
    fn phases_follow_input_cycle() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1");
        assert_eq!(engine.phase(), Phase::Idle);
        press(&mut engine, "+");
        assert_eq!(engine.phase(), Phase::OperatorPending);
        press(&mut engine, "2");
        assert_eq!(engine.phase(), Phase::Accumulating);
        press(&mut engine, "=");
        assert_eq!(engine.phase(), Phase::OperatorPending);
    }

    #[test]
    fn custom_config_changes_width_and_marker() {
        let config = EngineConfig {
            max_display_width: 4,
            error_marker: "E".to_string(),
        };
        let mut engine = CalculatorEngine::with_config(config).unwrap();
        assert_eq!(press(&mut engine, "1 / 3 =").pop().unwrap(), "0.33");
        assert_eq!(engine.state().display_value, "0.3333");
        assert_eq!(press(&mut engine, "/ 0 =").pop().unwrap(), "E");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            max_display_width: 0,
            error_marker: "Error".to_string(),
        };
        assert!(matches!(
            CalculatorEngine::with_config(config),
            Err(BuildError::InvalidConfig(_))
        ));
    }

    #[test]
    fn engines_are_independent() {
        let mut a = CalculatorEngine::new();
        let mut b = CalculatorEngine::new();
        press(&mut a, "1 +");
        press(&mut b, "7");
        assert_eq!(a.phase(), Phase::OperatorPending);
        assert_eq!(b.phase(), Phase::Idle);
        assert_eq!(b.display(), "7");
    }

    #[test]
    fn state_snapshot_serializes() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "6 *");
        let json = serde_json::to_string(engine.state()).unwrap();
        let restored: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, engine.state());
    }
}
