//! Log output
//!
//! Logs always go to stderr so reports on stdout stay machine-readable.
//! `DESKCALC_LOG` takes an `EnvFilter` directive and overrides the level
//! picked from `-v`/`-q`.

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "DESKCALC_LOG";

/// Builds the log filter from an optional directive, falling back to the
/// verbosity level
pub fn build_filter(directive: Option<&str>, verbosity: Verbosity) -> CliResult<EnvFilter> {
    match directive {
        Some(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive)
            .map_err(|e| CliError::invalid_argument(format!("{LOG_ENV}: {e}"))),
        _ => EnvFilter::try_new(verbosity.log_directive())
            .map_err(|e| CliError::invalid_argument(format!("log level: {e}"))),
    }
}

/// Installs the global subscriber.
///
/// JSON reports get JSON log lines. Installing twice is not an error; the
/// first subscriber stays.
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    let directive = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directive.as_deref(), config.verbosity)?;
    let ansi = config.color.should_color();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        OutputFormat::Json => builder.json().try_init(),
        OutputFormat::Text => builder.with_ansi(ansi).compact().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
    Ok(())
}
