//! Four-function arithmetic
//!
//! Division by zero is the only failure, and it never escapes the engine as
//! an error: `evaluate` folds it into the [`Outcome::Error`] sentinel that the
//! display shows verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::number::number_to_text;
use crate::core::{CalcError, CalcResult};

/// Text shown on the display after a division by zero
pub const ERROR_SENTINEL: &str = "Error";

/// Binary operator keys on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the button label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the plain ASCII character typed for this operator
    #[must_use]
    pub const fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a typed or printed character to an operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Result of evaluating one operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A numeric value (possibly NaN or infinite, no overflow checks)
    Value(f64),
    /// Division by zero
    Error,
}

impl Outcome {
    /// Returns the numeric value, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Error => None,
        }
    }

    /// Returns true for the division-by-zero sentinel
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&number_to_text(*v)),
            Self::Error => f.write_str(ERROR_SENTINEL),
        }
    }
}

/// Evaluates `a op b`, folding division by zero into the sentinel
#[must_use]
pub fn evaluate(a: f64, b: f64, op: Operator) -> Outcome {
    match op.apply(a, b) {
        Ok(value) => Outcome::Value(value),
        Err(_) => Outcome::Error,
    }
}
