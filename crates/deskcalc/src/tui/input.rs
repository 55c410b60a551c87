//! Keyboard input handling
//!
//! Maps terminal key events to calculator actions. Anything without a
//! mapping is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Operator};

/// What a key event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Action),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(Action::Equals),
            KeyCode::Backspace => KeyAction::Press(Action::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Action::AllClear),
            _ => KeyAction::None,
        }
    }

    fn map_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Press(Action::Digit(d as u8));
        }

        let action = match c {
            '.' | ',' => Action::Decimal,
            '+' => Action::Operator(Operator::Add),
            '-' => Action::Operator(Operator::Subtract),
            '*' | 'x' | 'X' => Action::Operator(Operator::Multiply),
            '/' => Action::Operator(Operator::Divide),
            '%' => Action::Percent,
            'n' | 'N' | '_' => Action::ToggleSign,
            '=' => Action::Equals,
            'q' | 'Q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(action)
    }

    /// Returns true if the character maps to a calculator button
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        matches!(Self::map_char(c), KeyAction::Press(_))
    }
}
