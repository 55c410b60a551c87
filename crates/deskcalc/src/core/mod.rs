//! Calculator core: number text, arithmetic, display fitting, state machine

pub mod action;
pub mod engine;
pub mod format;
pub mod number;
mod operations;

pub use action::{parse_sequence, Action};
pub use engine::{CalcState, Calculator, Phase, MAX_ENTRY_LEN};
pub use format::{fit_to_display, DISPLAY_WIDTH};
pub use operations::{evaluate, Operator, Outcome, ERROR_SENTINEL};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero only surfaces here from [`Operator::apply`]; the engine
/// turns it into the display sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// A key name that maps to no button
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// A key sequence with no keys in it
    #[error("Empty key sequence")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("sqrt".into());
        assert_eq!(err.to_string(), "Unknown key: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_display_empty_sequence() {
        assert_eq!(CalcError::EmptySequence.to_string(), "Empty key sequence");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
