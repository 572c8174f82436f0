//! Pure calculation dispatch.

use super::token::Operator;

/// Result of applying an operator to two operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// A finite result, already rounded.
    Value(f64),
    /// The calculation is undefined (division by zero, overflow).
    Undefined,
}

impl Outcome {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined => None,
        }
    }
}

/// Apply `op` to `a` and `b`, rounding to `places` decimal places.
///
/// An absent operator returns `b` unchanged. Division by zero and
/// non-finite results are [`Outcome::Undefined`].
///
/// # Example
///
/// ```rust
/// use keypad::core::{apply, Operator, Outcome};
///
/// assert_eq!(apply(0.1, 0.2, Some(Operator::Add), 9), Outcome::Value(0.3));
/// assert_eq!(apply(5.0, 0.0, Some(Operator::Divide), 9), Outcome::Undefined);
/// assert_eq!(apply(5.0, 8.0, None, 9), Outcome::Value(8.0));
/// ```
pub fn apply(a: f64, b: f64, op: Option<Operator>, places: usize) -> Outcome {
    let raw = match op {
        Some(Operator::Add) => a + b,
        Some(Operator::Subtract) => a - b,
        Some(Operator::Multiply) => a * b,
        Some(Operator::Divide) if b == 0.0 => return Outcome::Undefined,
        Some(Operator::Divide) => a / b,
        None => return Outcome::Value(b),
    };

    if !raw.is_finite() {
        return Outcome::Undefined;
    }
    Outcome::Value(round_to_places(raw, places))
}

/// Most decimal places [`round_to_places`] honours; f64 holds no more
/// than 17 significant digits.
pub const MAX_ROUNDING_PLACES: usize = 17;

/// Round to a fixed number of decimal places through decimal formatting.
///
/// Valid for any finite magnitude; non-finite input is returned as is.
/// `places` is capped at [`MAX_ROUNDING_PLACES`].
pub fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = places.min(MAX_ROUNDING_PLACES);
    let rounded = format!("{value:.places$}").parse().unwrap_or(value);
    // Collapse -0 so it renders as "0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(apply(3.0, 4.0, Some(Operator::Add), 9), Outcome::Value(7.0));
        assert_eq!(
            apply(9.0, 4.0, Some(Operator::Subtract), 9),
            Outcome::Value(5.0)
        );
        assert_eq!(
            apply(6.0, 7.0, Some(Operator::Multiply), 9),
            Outcome::Value(42.0)
        );
        assert_eq!(
            apply(7.0, 2.0, Some(Operator::Divide), 9),
            Outcome::Value(3.5)
        );
    }

    #[test]
    fn division_by_zero_is_undefined() {
        assert!(apply(5.0, 0.0, Some(Operator::Divide), 9).is_undefined());
        assert!(apply(0.0, 0.0, Some(Operator::Divide), 9).is_undefined());
        assert!(apply(-1.5, -0.0, Some(Operator::Divide), 9).is_undefined());
    }

    #[test]
    fn overflow_is_undefined() {
        assert!(apply(f64::MAX, f64::MAX, Some(Operator::Multiply), 9).is_undefined());
    }

    #[test]
    fn rounding_removes_float_noise() {
        assert_eq!(apply(0.1, 0.2, Some(Operator::Add), 9).value(), Some(0.3));
        assert_eq!(
            apply(1.0, 3.0, Some(Operator::Divide), 9).value(),
            Some(0.333333333)
        );
        assert_eq!(
            apply(2.0, 3.0, Some(Operator::Divide), 9).value(),
            Some(0.666666667)
        );
    }

    #[test]
    fn missing_operator_is_identity_on_right_operand() {
        assert_eq!(apply(100.0, -2.5, None, 9), Outcome::Value(-2.5));
    }

    #[test]
    fn negative_zero_is_normalized() {
        let result = apply(-0.0000000001, 1.0, Some(Operator::Multiply), 9);
        assert_eq!(result, Outcome::Value(0.0));
        assert!(result.value().unwrap().is_sign_positive());
    }

    #[test]
    fn oversized_precision_is_capped() {
        assert_eq!(round_to_places(0.1 + 0.2, 70_000), round_to_places(0.1 + 0.2, 17));
        assert_eq!(apply(1.0, 2.0, Some(Operator::Add), 70_000), Outcome::Value(3.0));
    }

    #[test]
    fn large_values_round_without_overflow() {
        assert_eq!(round_to_places(1e300, 9), 1e300);
    }
}
