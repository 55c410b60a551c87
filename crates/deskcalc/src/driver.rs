//! Calculator drivers
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every front end: the bare engine and the terminal app.

use crate::core::{parse_sequence, Action, CalcResult, Calculator};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use deskcalc::core::Calculator;
/// use deskcalc::driver::{verify_chaining, CalculatorDriver};
///
/// let mut calc = Calculator::new();
/// calc.press_keys("7 + 2 + 1 =").unwrap();
/// assert_eq!(calc.display(), "10");
///
/// calc.all_clear();
/// verify_chaining(&mut calc);
/// ```
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, action: Action);

    /// Returns the text currently on the display
    fn display(&self) -> String;

    /// Presses every key in a whitespace-separated sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty or names an unknown key.
    /// Nothing is pressed in that case.
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for action in parse_sequence(keys)? {
            self.press(action);
        }
        Ok(())
    }

    /// Presses AC
    fn all_clear(&mut self) {
        self.press(Action::AllClear);
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: Action) {
        Self::press(self, action);
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Action;
    use crate::tui::CalculatorApp;

    /// Driver that routes presses through the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each one starts and ends with AC so they can run back to back.

fn check<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.all_clear();
    let pressed = driver.press_keys(keys);
    assert!(pressed.is_ok(), "bad key sequence {keys:?}: {pressed:?}");
    assert_eq!(driver.display(), expected, "after {keys:?}");
    driver.all_clear();
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "5 + 3 =", "8");
    check(driver, "9 - 4 =", "5");
    check(driver, "6 × 7 =", "42");
    check(driver, "8 ÷ 2 =", "4");
    check(driver, "2 - 5 =", "-3");
    check(driver, "2.5 × 4 =", "10");
}

/// Verifies the divide-by-zero sentinel and recovery from it
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1 ÷ 0 =", "Error");
    check(driver, "1 ÷ 0 +", "0");
    check(driver, "1 ÷ 0 + 2 + 3 =", "NaN");
    check(driver, "1 ÷ 0 = 7", "7");
    check(driver, "1 ÷ 0 = C", "0");
}

/// Verifies the twelve-character entry limit
pub fn verify_entry_limit<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "999999999999 9", "999999999999");
    check(driver, "12345678901 . 5", "12345678901.");
    check(driver, "1 . 2 . 3", "1.23");
}

/// Verifies operator chaining before equals
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "7 + 2 + 1 =", "10");
    check(driver, "2 × 3 - 1 =", "5");
    check(driver, "9 + ×", "0");
    check(driver, "9 + × 2 =", "18");
}

/// Verifies sign toggle and percent
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "5 (-)", "-5");
    check(driver, "5 (-) (-)", "5");
    check(driver, "(-)", "0");
    check(driver, "50 %", "0.5");
    check(driver, "5 %", "0.05");
}

/// Verifies backspace and all-clear
pub fn verify_clearing<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1 2 3 C", "12");
    check(driver, "7 C", "0");
    check(driver, "5 + 3 AC", "0");
    check(driver, "5 + 3 AC 2 =", "2");
}

/// Verifies results are fitted to the display
pub fn verify_display_fitting<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1 ÷ 3 =", "0.3333333333");
    check(driver, "2 ÷ 3 =", "0.6666666667");
    check(driver, "0.1 + 0.2 =", "0.3");
    check(driver, "999999999999 × 10 =", "999999999999");
}

/// Complete verification suite - runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_entry_limit(driver);
    verify_chaining(driver);
    verify_sign_and_percent(driver);
    verify_clearing(driver);
    verify_display_fitting(driver);
}
