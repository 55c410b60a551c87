//! Fit command handler

use deskcalc::core::fit_to_display;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_fit_text, render_json, write_report, FitReport, OutputFormat};
use crate::FitArgs;

/// Execute the fit command
pub fn execute_fit(config: &CliConfig, args: &FitArgs) -> CliResult<()> {
    let report = build_fit_report(&args.text)?;
    debug!(input = %report.input, display = %report.display, "fitted");

    let rendered = match config.format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Text => render_fit_text(&report, config.use_color()),
    };
    write_report(&rendered)
}

/// Fits a number text to the display
pub fn build_fit_report(text: &str) -> CliResult<FitReport> {
    let input = text.trim();
    if input.is_empty() {
        return Err(CliError::invalid_argument("number text is empty"));
    }

    Ok(FitReport {
        input: input.to_string(),
        display: fit_to_display(input),
    })
}
