//! Deskcalc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! deskcalc press 12 + 3 =          # prints 15
//! deskcalc press 1 / 0 = --steps   # display after every key
//! deskcalc --format json press 7 ×
//! deskcalc fit 0.3333333333333333  # prints 0.3333333333
//! deskcalc tui                     # interactive keypad
//! ```

use std::process::ExitCode;

use clap::Parser;
use deskcalc_cli::{
    handlers::{execute_fit, execute_press, run_tui},
    logging::init_logging,
    Cli, CliConfig, CliResult, Commands, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_logging(&config)?;
    debug!(?config, "configuration");

    match cli.command {
        Commands::Press(args) => execute_press(&config, &args),
        Commands::Fit(args) => execute_fit(&config, &args),
        Commands::Tui => run_tui(),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into())
}
