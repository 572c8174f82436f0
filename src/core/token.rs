//! Input tokens delivered by the input source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning raw text into a [`Token`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unrecognized token '{input}'")]
    Unrecognized { input: String },
}

/// One of the four binary arithmetic operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// ASCII symbol used on the keypad.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parse an operator symbol, accepting the typographic forms too.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single discrete unit of user input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// A decimal digit in `0..=9`.
    ///
    /// Build it with [`Token::digit`] or by parsing; the engine ignores
    /// values above nine.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
}

impl Token {
    /// Build a digit token, rejecting values above nine.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// The character appended to the display for digit-like tokens.
    pub(crate) fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::DecimalPoint => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "clear"),
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if ["clear", "c", "ac"]
            .iter()
            .any(|alias| trimmed.eq_ignore_ascii_case(alias))
        {
            return Ok(Self::Clear);
        }

        let mut chars = trimmed.chars();
        let token = match (chars.next(), chars.next()) {
            (Some(c), None) => match c {
                '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                '.' => Some(Self::DecimalPoint),
                '=' => Some(Self::Equals),
                other => Operator::from_symbol(other).map(Self::Operator),
            },
            _ => None,
        };

        token.ok_or_else(|| TokenError::Unrecognized {
            input: s.to_string(),
        })
    }
}
