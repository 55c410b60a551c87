//! Key-sequence scenarios run against every driver

#![allow(clippy::unwrap_used)]

use deskcalc::driver::{run_all_scenarios, CalculatorDriver};
use deskcalc::prelude::*;

fn display_after<D: CalculatorDriver + Default>(keys: &str) -> String {
    let mut driver = D::default();
    driver.press_keys(keys).unwrap();
    driver.display()
}

#[test]
fn engine_runs_every_scenario() {
    run_all_scenarios(&mut Calculator::new());
}

#[cfg(feature = "tui")]
#[test]
fn tui_runs_every_scenario() {
    run_all_scenarios(&mut TuiDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn drivers_agree_on_edge_sequences() {
    let sequences = [
        "- =",
        "5 + =",
        ". . 5",
        "0 0 0 7",
        "5 (-) %",
        "1 ÷ 0 = (-) %",
        "1 ÷ 0 = +",
        "8 ÷ 0 + 3 =",
        "999999999999 (-)",
        "2 = 3",
        "12 + 3 = 4",
        "1 ÷ 7 =",
    ];
    for keys in sequences {
        assert_eq!(
            display_after::<Calculator>(keys),
            display_after::<TuiDriver>(keys),
            "{keys}"
        );
    }
}

#[test]
fn sentinel_is_inert_for_sign_and_percent() {
    assert_eq!(display_after::<Calculator>("1 ÷ 0 = (-) %"), "Error");
}

#[test]
fn operator_after_sentinel_drops_it() {
    let mut calc = Calculator::new();
    calc.press_keys("1 ÷ 0 = +").unwrap();
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.state().stored(), None);
    assert_eq!(calc.state().pending(), Some(Operator::Add));
}

#[test]
fn chained_division_by_zero_keeps_operator_pending() {
    let mut calc = Calculator::new();
    calc.press_keys("8 ÷ 0 +").unwrap();
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.state().stored(), Some(ERROR_SENTINEL));
    assert_eq!(calc.state().pending(), Some(Operator::Add));

    calc.press_keys("2 + 3 =").unwrap();
    assert_eq!(calc.display(), "NaN");
}

#[test]
fn equals_without_second_operand_is_ignored() {
    let mut calc = Calculator::new();
    calc.press_keys("5 + =").unwrap();
    assert_eq!(calc.phase(), Phase::OperatorPending);
    assert_eq!(calc.state().stored(), Some("5"));
}

#[test]
fn digits_append_to_a_result() {
    assert_eq!(display_after::<Calculator>("12 + 3 = 4"), "154");
}

#[test]
fn sign_toggle_may_exceed_entry_width() {
    let text = display_after::<Calculator>("999999999999 (-)");
    assert_eq!(text, "-999999999999");
    assert_eq!(text.chars().count(), MAX_ENTRY_LEN + 1);
}

#[test]
fn percent_result_is_not_fitted() {
    assert_eq!(display_after::<Calculator>("1 %"), "0.01");
    assert_eq!(display_after::<Calculator>("123456789012 %"), "1234567890.12");
}

#[test]
fn lone_minus_sign_shows_nan_after_equals() {
    assert_eq!(display_after::<Calculator>("5 + 1 (-) C ="), "NaN");
}
