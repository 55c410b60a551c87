//! Keypad actions
//!
//! Every way of driving the calculator (buttons, keys, CLI tokens) ends up as
//! one of these parameterless triggers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operator};

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Sign toggle, labelled `(-)`
    ToggleSign,
    /// Percent: divide the entry by 100
    Percent,
    /// One of the four binary operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything (AC)
    AllClear,
    /// Remove the last typed character (C)
    Backspace,
}

impl Action {
    /// Creates a digit action, rejecting anything above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::ToggleSign => "(-)".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Backspace => "C".to_string(),
        }
    }

    /// Returns true for actions that only edit the entry buffer
    #[must_use]
    pub const fn is_entry_edit(&self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Decimal | Self::ToggleSign | Self::Percent | Self::Backspace
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Action {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Ok(Self::Digit(d as u8));
            }
            if let Some(op) = Operator::from_char(c) {
                return Ok(Self::Operator(op));
            }
        }

        match token.to_ascii_lowercase().as_str() {
            "." | "," => Ok(Self::Decimal),
            "(-)" | "+/-" | "±" | "neg" | "n" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            "=" | "enter" => Ok(Self::Equals),
            "ac" | "allclear" => Ok(Self::AllClear),
            "c" | "bs" | "backspace" => Ok(Self::Backspace),
            _ => Err(CalcError::UnknownKey(token.to_string())),
        }
    }
}

/// Parses a whitespace-separated key sequence.
///
/// A token made only of digits and at most one point (`"123"`, `"2.5"`)
/// expands to one press per character; other tokens must name a single key.
///
/// ```rust
/// use deskcalc::core::{parse_sequence, Action, Operator};
///
/// let keys = parse_sequence("12 + 3 =").unwrap();
/// assert_eq!(keys[0], Action::Digit(1));
/// assert_eq!(keys[2], Action::Operator(Operator::Add));
/// assert_eq!(keys.len(), 5);
/// ```
pub fn parse_sequence(input: &str) -> CalcResult<Vec<Action>> {
    let mut actions = Vec::new();
    for token in input.split_whitespace() {
        if is_number_token(token) {
            actions.extend(token.chars().map(|c| match c.to_digit(10) {
                Some(d) => Action::Digit(d as u8),
                None => Action::Decimal,
            }));
        } else {
            actions.push(token.parse()?);
        }
    }

    if actions.is_empty() {
        return Err(CalcError::EmptySequence);
    }
    Ok(actions)
}

fn is_number_token(token: &str) -> bool {
    token.len() > 1
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().filter(|&c| c == '.').count() <= 1
        && token.chars().any(|c| c.is_ascii_digit())
}
