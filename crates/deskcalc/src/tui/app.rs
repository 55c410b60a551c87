//! TUI application state
//!
//! Wraps the calculator engine with the on-screen keypad, the quit flag and
//! the last key pressed.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::core::{Action, Calculator, Phase};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Calculator engine
    calculator: Calculator,
    /// Keypad with the active-operator highlight
    keypad: Keypad,
    /// Key event mapping
    input: InputHandler,
    /// Most recent button pressed
    last_key: Option<Action>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app in the idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the text shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns true when the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.calculator.state().is_error()
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.calculator.phase()
    }

    /// Returns the most recent button pressed
    #[must_use]
    pub fn last_key(&self) -> Option<Action> {
        self.last_key
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a calculator button and updates the operator highlight
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Operator(op) => self.keypad.highlight_operator(Some(op)),
            Action::Equals | Action::ToggleSign | Action::Percent | Action::AllClear => {
                self.keypad.highlight_operator(None);
            }
            Action::Digit(_) | Action::Decimal | Action::Backspace => {}
        }

        self.calculator.press(action);
        self.last_key = Some(action);
    }

    /// Handles a key event, returning true if it changed anything
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        match self.input.handle_key(event) {
            KeyAction::Press(action) => {
                self.press(action);
                true
            }
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit();
                true
            }
            KeyAction::None => false,
        }
    }

    /// Handles a mouse click at screen position `(x, y)`.
    ///
    /// `keypad_area` is where the keypad was last drawn. Returns the action
    /// pressed, if the click landed on a button.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Action> {
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action)?;
        self.press(action);
        Some(action)
    }

    /// Returns the pending expression, e.g. `"12 +"`, or an empty string
    #[must_use]
    pub fn expression_line(&self) -> String {
        let state = self.calculator.state();
        match (state.stored(), state.pending()) {
            (Some(stored), Some(op)) => format!("{stored} {op}"),
            _ => String::new(),
        }
    }
}
