//! Command handlers
//!
//! Each handler keeps its pure helpers next to the execution logic so they
//! can be tested without a terminal.

pub mod fit;
pub mod press;
pub mod tui;

pub use fit::{build_fit_report, execute_fit};
pub use press::{build_press_report, execute_press};
pub use tui::{handle_event, run_tui};
