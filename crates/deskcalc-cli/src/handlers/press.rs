//! Press command handler

use deskcalc::core::{parse_sequence, Action, Calculator};
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_json, render_press_text, write_report, OutputFormat, PressReport, Step};
use crate::PressArgs;

/// Execute the press command
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let report = build_press_report(&args.keys, args.steps)?;
    info!(
        keys = report.keys.len(),
        display = %report.display,
        "key sequence finished"
    );

    let rendered = match config.format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Text => render_press_text(&report, config.use_color()),
    };
    write_report(&rendered)
}

/// Runs a key sequence on a fresh calculator.
///
/// The keys are parsed up front, so an unknown key fails before anything
/// is pressed.
pub fn build_press_report(keys: &[String], steps: bool) -> CliResult<PressReport> {
    let actions = parse_sequence(&keys.join(" "))?;

    let mut calc = Calculator::new();
    let mut trail = Vec::new();
    for &action in &actions {
        calc.press(action);
        if steps {
            trail.push(Step {
                key: action.label(),
                display: calc.display().to_string(),
            });
        }
    }

    let state = calc.state();
    Ok(PressReport {
        keys: actions.iter().map(Action::label).collect(),
        display: calc.display().to_string(),
        phase: calc.phase(),
        stored: state.stored().map(str::to_string),
        pending: state.pending(),
        steps: trail,
    })
}
