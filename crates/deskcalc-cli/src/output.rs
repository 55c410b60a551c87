//! Output formatting
//!
//! Reports are built as plain data and rendered either as text, optionally
//! styled with `console`, or as JSON.

use console::{style, Term};
use deskcalc::core::{Operator, Phase, ERROR_SENTINEL};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after one key of a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Key label
    pub key: String,
    /// Display text after the key
    pub display: String,
}

/// Result of running a key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressReport {
    /// Key labels in press order
    pub keys: Vec<String>,
    /// Final display text
    pub display: String,
    /// Final phase
    pub phase: Phase,
    /// Stored operand, if any
    pub stored: Option<String>,
    /// Pending operator, if any
    pub pending: Option<Operator>,
    /// Per-key displays, only when requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<Step>,
}

/// Result of fitting a number text to the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitReport {
    /// Text as given
    pub input: String,
    /// Fitted text
    pub display: String,
}

/// Styles a display value: red for the error sentinel, green otherwise
#[must_use]
pub fn styled_display(text: &str, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    if text == ERROR_SENTINEL {
        style(text).force_styling(true).red().bold().to_string()
    } else {
        style(text).force_styling(true).green().bold().to_string()
    }
}

/// Renders a press report as text
#[must_use]
pub fn render_press_text(report: &PressReport, use_color: bool) -> String {
    let mut out = String::new();
    let width = report
        .steps
        .iter()
        .map(|s| s.key.chars().count())
        .max()
        .unwrap_or(0);

    for step in &report.steps {
        let key = format!("{:>width$}", step.key);
        let key = if use_color {
            style(key).force_styling(true).yellow().to_string()
        } else {
            key
        };
        out.push_str(&format!(
            "{key}  {}\n",
            styled_display(&step.display, use_color)
        ));
    }

    out.push_str(&styled_display(&report.display, use_color));
    out.push('\n');
    out
}

/// Renders a fit report as text
#[must_use]
pub fn render_fit_text(report: &FitReport, use_color: bool) -> String {
    format!("{}\n", styled_display(&report.display, use_color))
}

/// Renders any report as pretty JSON
pub fn render_json<T: Serialize>(report: &T) -> CliResult<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Writes a rendered report to stdout
pub fn write_report(rendered: &str) -> CliResult<()> {
    Term::stdout().write_str(rendered)?;
    Ok(())
}
