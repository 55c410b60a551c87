//! Desk Calculator
//!
//! A four-function keypad calculator: a twelve-character entry buffer, a
//! stored operand and a pending operator, driven one button press at a time.
//!
//! - [`core`]: number text, arithmetic, display fitting and the state machine
//! - [`driver`]: one trait over every front end, plus shared scenario checks
//! - `tui` (feature `tui`): ratatui view with a clickable keypad
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_all(parse_sequence("7 + 2 + 1 =").unwrap());
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero shows a sentinel instead of failing
//! calc.press_all(parse_sequence("1 ÷ 0 =").unwrap());
//! assert_eq!(calc.display(), "Error");
//!
//! // Results are fitted to the twelve-character display
//! assert_eq!(fit_to_display("0.3333333333333333"), "0.3333333333");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, fit_to_display, parse_sequence, Action, CalcError, CalcResult, CalcState,
        Calculator, Operator, Outcome, Phase, DISPLAY_WIDTH, ERROR_SENTINEL, MAX_ENTRY_LEN,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
