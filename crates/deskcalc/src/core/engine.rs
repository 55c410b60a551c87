//! Interaction state machine
//!
//! [`CalcState`] is a plain value: `apply` consumes it together with one
//! [`Action`] and returns the next state, so every transition can be tested
//! without any front end. [`Calculator`] owns a state and is what front ends
//! hold on to.
//!
//! Phases:
//!
//! ```text
//!            digit/./(-)/%              operator
//!   Idle ─────────────────▶ Entering ─────────────▶ OperatorPending
//!    ▲                         ▲                        │ digit/.
//!    │ AC (from anywhere)      │ =                      ▼
//!    └─────────────────────────┴──────────── EnteringSecondOperand
//!                                               │ operator (chains)
//!                                               └──────▶ OperatorPending
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::format::fit_to_display;
use crate::core::number::{number_to_text, text_to_number};
use crate::core::{evaluate, Action, Operator, Outcome, ERROR_SENTINEL};

/// Maximum characters digit and decimal presses may grow the entry to
pub const MAX_ENTRY_LEN: usize = 12;

/// Where the machine is, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing typed, no operator
    Idle,
    /// Typing the first operand (or looking at a result)
    Entering,
    /// Operator committed, waiting for the second operand
    OperatorPending,
    /// Typing the second operand
    EnteringSecondOperand,
}

/// The three interaction fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    /// Text being typed
    entry: String,
    /// Left-hand operand, kept as text
    stored: Option<String>,
    /// Operator waiting for its right-hand operand
    pending: Option<Operator>,
}

impl CalcState {
    /// Creates the idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry buffer
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns the stored operand
    #[must_use]
    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// Returns the pending operator
    #[must_use]
    pub const fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Text for the display: the entry, or `"0"` when nothing is typed
    #[must_use]
    pub fn display(&self) -> &str {
        if self.entry.is_empty() {
            "0"
        } else {
            &self.entry
        }
    }

    /// Returns true while the entry holds the division-by-zero sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.entry == ERROR_SENTINEL
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.pending, self.entry.is_empty()) {
            (None, true) => Phase::Idle,
            (None, false) => Phase::Entering,
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::EnteringSecondOperand,
        }
    }

    /// Applies one action and returns the next state
    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Digit(d) => self.push_digit(d),
            Action::Decimal => self.push_decimal(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
            Action::Operator(op) => self.commit_operator(op),
            Action::Equals => self.equals(),
            Action::AllClear => self = Self::default(),
            Action::Backspace => self.backspace(),
        }
        self
    }

    fn entry_len(&self) -> usize {
        self.entry.chars().count()
    }

    fn push_digit(&mut self, d: u8) {
        let Some(digit) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.is_error() {
            self.entry = digit.to_string();
            return;
        }

        if self.entry_len() < MAX_ENTRY_LEN {
            if self.entry == "0" {
                self.entry = digit.to_string();
            } else {
                self.entry.push(digit);
            }
        }
    }

    fn push_decimal(&mut self) {
        if self.is_error() {
            self.entry = "0.".to_string();
            return;
        }

        if self.entry_len() < MAX_ENTRY_LEN && !self.entry.contains('.') {
            if self.entry.is_empty() {
                self.entry.push_str("0.");
            } else {
                self.entry.push('.');
            }
        }
    }

    fn toggle_sign(&mut self) {
        if self.entry.is_empty() || self.is_error() {
            return;
        }

        if let Some(unsigned) = self.entry.strip_prefix('-') {
            self.entry = unsigned.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        if self.entry.is_empty() || self.is_error() {
            return;
        }

        // Deliberately not fitted to the display width
        self.entry = number_to_text(text_to_number(&self.entry) / 100.0);
    }

    fn commit_operator(&mut self, op: Operator) {
        let operand = if self.entry.is_empty() || self.is_error() {
            None
        } else {
            Some(std::mem::take(&mut self.entry))
        };

        match (self.pending, self.stored.clone(), operand) {
            // A chained division by zero stores the sentinel text, which
            // reads back as NaN in later operations
            (Some(pending), Some(stored), Some(operand)) => {
                self.stored = Some(resolve(&stored, &operand, pending).to_string());
            }
            (_, _, Some(operand)) => self.stored = Some(operand),
            _ => {}
        }

        self.pending = Some(op);
        self.entry.clear();
    }

    fn equals(&mut self) {
        let (Some(op), Some(stored)) = (self.pending, self.stored.as_deref()) else {
            return;
        };
        if self.entry.is_empty() {
            return;
        }

        let outcome = resolve(stored, &self.entry, op);
        self.entry = fit_to_display(&outcome.to_string());
        self.stored = None;
        self.pending = None;
    }

    fn backspace(&mut self) {
        if self.is_error() {
            self.entry.clear();
        } else {
            self.entry.pop();
        }
    }

}

fn resolve(lhs: &str, rhs: &str, op: Operator) -> Outcome {
    let outcome = evaluate(text_to_number(lhs), text_to_number(rhs), op);
    debug!(lhs, rhs, op = %op, result = %outcome, "resolved operation");
    outcome
}

/// Calculator controller: owns the state and dispatches actions
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{Action, Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.press_all([
///     Action::Digit(5),
///     Action::Operator(Operator::Add),
///     Action::Digit(3),
///     Action::Equals,
/// ]);
/// assert_eq!(calc.display(), "8");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalcState,
    presses: u64,
}

impl Calculator {
    /// Creates an idle calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a single action
    pub fn press(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        self.presses += 1;
        trace!(
            key = %action,
            entry = self.state.entry(),
            phase = ?self.state.phase(),
            "key press"
        );
    }

    /// Dispatches a sequence of actions in order
    pub fn press_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.press(action);
        }
    }

    /// Text for the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Number of actions dispatched since creation
    #[must_use]
    pub const fn presses(&self) -> u64 {
        self.presses
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::core::parse_sequence;
    use proptest::prelude::*;

    fn run(keys: &str) -> CalcState {
        parse_sequence(keys)
            .unwrap()
            .into_iter()
            .fold(CalcState::new(), CalcState::apply)
    }

    // ===== Initial state =====

    #[test]
    fn test_new_state_is_idle() {
        let state = CalcState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.display(), "0");
        assert_eq!(state.stored(), None);
        assert_eq!(state.pending(), None);
    }

    // ===== Digits =====

    #[test]
    fn test_digits_append() {
        assert_eq!(run("1 2 3").entry(), "123");
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(run("0 7").entry(), "7");
        assert_eq!(run("0 0").entry(), "0");
    }

    #[test]
    fn test_digit_limit_twelve() {
        let state = run("999999999999");
        assert_eq!(state.entry(), "999999999999");
        let state = state.apply(Action::Digit(1));
        assert_eq!(state.display(), "999999999999");
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let state = CalcState::new().apply(Action::Digit(12));
        assert_eq!(state, CalcState::new());
    }

    // ===== Decimal =====

    #[test]
    fn test_decimal_seeds_zero() {
        assert_eq!(run(".").entry(), "0.");
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(run("1 . 5 .").entry(), "1.5");
    }

    #[test]
    fn test_decimal_respects_limit() {
        assert_eq!(run("123456789012 .").entry(), "123456789012");
        assert_eq!(run("12345678901 .").entry(), "12345678901.");
    }

    #[test]
    fn test_zero_point_keeps_zero() {
        // "0." is not a lone "0", so the digit appends
        assert_eq!(run(". 5").entry(), "0.5");
    }

    // ===== Sign toggle =====

    #[test]
    fn test_toggle_sign() {
        assert_eq!(run("5 (-)").display(), "-5");
        assert_eq!(run("5 (-) (-)").display(), "5");
    }

    #[test]
    fn test_toggle_sign_on_empty_is_noop() {
        assert_eq!(CalcState::new().apply(Action::ToggleSign), CalcState::new());
    }

    // ===== Percent =====

    #[test]
    fn test_percent() {
        assert_eq!(run("5 0 %").entry(), "0.5");
        assert_eq!(run("5 %").entry(), "0.05");
    }

    #[test]
    fn test_percent_not_fitted_to_display() {
        // Thirteen characters, wider than the display
        let state = run("123456789012 %");
        assert_eq!(state.entry(), "1234567890.12");
    }

    #[test]
    fn test_percent_on_empty_is_noop() {
        assert_eq!(CalcState::new().apply(Action::Percent), CalcState::new());
    }

    // ===== Backspace =====

    #[test]
    fn test_backspace() {
        assert_eq!(run("1 2 3 C").entry(), "12");
        assert_eq!(run("1 C").display(), "0");
        assert_eq!(CalcState::new().apply(Action::Backspace), CalcState::new());
    }

    #[test]
    fn test_backspace_leaves_bare_minus() {
        let state = run("5 (-) C");
        assert_eq!(state.entry(), "-");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_stores_entry() {
        let state = run("5 +");
        assert_eq!(state.stored(), Some("5"));
        assert_eq!(state.pending(), Some(Operator::Add));
        assert_eq!(state.entry(), "");
        assert_eq!(state.phase(), Phase::OperatorPending);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_operator_replaces_pending_operator() {
        let state = run("5 + ×");
        assert_eq!(state.stored(), Some("5"));
        assert_eq!(state.pending(), Some(Operator::Multiply));
    }

    #[test]
    fn test_operator_without_entry_sets_pending_only() {
        let state = run("+");
        assert_eq!(state.stored(), None);
        assert_eq!(state.pending(), Some(Operator::Add));
    }

    #[test]
    fn test_second_operand_phase() {
        let state = run("5 + 3");
        assert_eq!(state.phase(), Phase::EnteringSecondOperand);
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn test_chaining_resolves_pending() {
        let state = run("7 + 2 +");
        assert_eq!(state.stored(), Some("9"));
        assert_eq!(state.pending(), Some(Operator::Add));
        assert_eq!(state.entry(), "");
    }

    #[test]
    fn test_chained_result_is_not_fitted() {
        let state = run("1 ÷ 3 +");
        assert_eq!(state.stored(), Some("0.3333333333333333"));
    }

    #[test]
    fn test_chain_divide_by_zero_stores_sentinel() {
        let state = run("8 ÷ 0 +");
        assert_eq!(state.display(), "0");
        assert_eq!(state.entry(), "");
        assert_eq!(state.stored(), Some("Error"));
        assert_eq!(state.pending(), Some(Operator::Add));
        assert_eq!(state.phase(), Phase::OperatorPending);
    }

    #[test]
    fn test_chain_after_stored_sentinel_is_nan() {
        assert_eq!(run("8 ÷ 0 + 3 =").display(), "NaN");
        assert_eq!(run("1 ÷ 0 + 2 + 3 =").display(), "NaN");
        assert_eq!(run("1 ÷ 0 + 2 +").stored(), Some("NaN"));
    }

    // ===== Equals =====

    #[test]
    fn test_equals_add() {
        let state = run("5 + 3 =");
        assert_eq!(state.display(), "8");
        assert_eq!(state.stored(), None);
        assert_eq!(state.pending(), None);
        assert_eq!(state.phase(), Phase::Entering);
    }

    #[test]
    fn test_equals_all_operators() {
        assert_eq!(run("9 - 4 =").display(), "5");
        assert_eq!(run("6 × 7 =").display(), "42");
        assert_eq!(run("7 ÷ 2 =").display(), "3.5");
    }

    #[test]
    fn test_equals_fits_result() {
        assert_eq!(run("1 ÷ 3 =").display(), "0.3333333333");
        assert_eq!(run("2 ÷ 3 =").display(), "0.6666666667");
    }

    #[test]
    fn test_equals_scientific_result_not_fitted() {
        let state = run("999999999999 × 999999999999 × 999999999999 =");
        assert!(state.display().contains('e'));
    }

    #[test]
    fn test_equals_divide_by_zero() {
        assert_eq!(run("1 ÷ 0 =").display(), "Error");
    }

    #[test]
    fn test_equals_noop_without_pending() {
        let state = run("5");
        assert_eq!(state.clone().apply(Action::Equals), state);
    }

    #[test]
    fn test_equals_noop_without_second_operand() {
        let state = run("5 +");
        assert_eq!(state.clone().apply(Action::Equals), state);
    }

    #[test]
    fn test_equals_noop_without_stored_operand() {
        let state = run("+ 5");
        assert_eq!(state.clone().apply(Action::Equals), state);
    }

    #[test]
    fn test_digits_append_to_result() {
        assert_eq!(run("5 + 3 = 1").display(), "81");
    }

    #[test]
    fn test_decimal_results_lose_float_noise() {
        assert_eq!(run(". 1 + . 2 =").display(), "0.3");
    }

    #[test]
    fn test_negative_zero_result_displays_zero() {
        assert_eq!(run("5 (-) × 0 =").display(), "0");
    }

    #[test]
    fn test_bare_minus_operand_yields_nan() {
        assert_eq!(run("5 + 5 (-) C =").display(), "NaN");
    }

    // ===== Error sentinel recovery =====

    #[test]
    fn test_digit_after_error_starts_fresh() {
        assert_eq!(run("1 ÷ 0 = 4").display(), "4");
        assert_eq!(run("1 ÷ 0 = .").display(), "0.");
    }

    #[test]
    fn test_error_ignores_sign_and_percent() {
        assert_eq!(run("1 ÷ 0 = (-)").display(), "Error");
        assert_eq!(run("1 ÷ 0 = %").display(), "Error");
    }

    #[test]
    fn test_backspace_clears_error() {
        assert_eq!(run("1 ÷ 0 = C").display(), "0");
    }

    #[test]
    fn test_operator_after_error_does_not_store_sentinel() {
        let state = run("1 ÷ 0 = +");
        assert_eq!(state.stored(), None);
        assert_eq!(state.pending(), Some(Operator::Add));
        assert_eq!(state.display(), "0");
    }

    // ===== All clear =====

    #[test]
    fn test_all_clear_resets_everything() {
        let state = run("7 + 2 + 4 AC");
        assert_eq!(state, CalcState::new());
        assert_eq!(run("1 ÷ 0 = AC"), CalcState::new());
    }

    // ===== Calculator controller =====

    #[test]
    fn test_calculator_press_counts() {
        let mut calc = Calculator::new();
        calc.press_all(parse_sequence("7 + 2 + 1 =").unwrap());
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.presses(), 6);
        assert_eq!(calc.phase(), Phase::Entering);
    }

    #[test]
    fn test_calculator_state_access() {
        let mut calc = Calculator::new();
        calc.press(Action::Digit(4));
        calc.press(Action::Operator(Operator::Multiply));
        assert_eq!(calc.state().stored(), Some("4"));
        assert_eq!(calc.state().pending(), Some(Operator::Multiply));
    }

    #[test]
    fn test_state_serializes() {
        let state = run("4 ×");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"entry":"","stored":"4","pending":"multiply"}"#);
    }

    proptest! {
        #[test]
        fn prop_entry_never_exceeds_limit(keys in proptest::collection::vec(
            prop_oneof![(0u8..10).prop_map(Action::Digit), Just(Action::Decimal)],
            0..40,
        )) {
            let state = keys.into_iter().fold(CalcState::new(), CalcState::apply);
            prop_assert!(state.entry().chars().count() <= MAX_ENTRY_LEN);
            prop_assert!(state.entry().matches('.').count() <= 1);
        }

        #[test]
        fn prop_all_clear_always_resets(keys in proptest::collection::vec(any_action(), 0..30)) {
            let state = keys.into_iter().fold(CalcState::new(), CalcState::apply);
            prop_assert_eq!(state.apply(Action::AllClear), CalcState::new());
        }

        #[test]
        fn prop_display_never_empty(keys in proptest::collection::vec(any_action(), 0..30)) {
            let state = keys.into_iter().fold(CalcState::new(), CalcState::apply);
            prop_assert!(!state.display().is_empty());
        }

        #[test]
        fn prop_stored_operand_only_with_pending(keys in proptest::collection::vec(any_action(), 0..30)) {
            let state = keys.into_iter().fold(CalcState::new(), CalcState::apply);
            if state.stored().is_some() {
                prop_assert!(state.pending().is_some());
            }
        }
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0u8..10).prop_map(Action::Digit),
            Just(Action::Decimal),
            Just(Action::ToggleSign),
            Just(Action::Percent),
            prop_oneof![
                Just(Operator::Add),
                Just(Operator::Subtract),
                Just(Operator::Multiply),
                Just(Operator::Divide),
            ]
            .prop_map(Action::Operator),
            Just(Action::Equals),
            Just(Action::AllClear),
            Just(Action::Backspace),
        ]
    }
}
