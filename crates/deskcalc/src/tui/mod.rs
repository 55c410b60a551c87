//! Terminal front end
//!
//! A ratatui view over the calculator engine: display panel, clickable
//! keypad and a help sidebar. The event loop lives in the binary.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, CalculatorUI, UiLayout, HELP_SHORTCUTS, TITLE};
