//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// Deskcalc: a four-function keypad calculator with a twelve-character display
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "DESKCALC_COLOR", global = true)]
    pub color: ColorArg,

    /// Report format (text, json)
    #[arg(long, default_value = "text", env = "DESKCALC_FORMAT", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    ///
    /// Keys: digits, `.`, `(-)` or `neg`, `%`, `+ - × ÷` (or `* x /`), `=`,
    /// `AC`, `C`. Multi-digit numbers may be written as one token.
    Press(PressArgs),

    /// Fit a number text to the twelve-character display
    Fit(FitArgs),

    /// Start the interactive terminal calculator
    Tui,
}

/// Arguments for the press command
#[derive(Args, Debug, Clone)]
pub struct PressArgs {
    /// Keys to press, in order
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the fit command
#[derive(Args, Debug, Clone)]
pub struct FitArgs {
    /// Number text, e.g. 0.3333333333333333
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_press() {
        let cli = Cli::try_parse_from(["deskcalc", "press", "12", "+", "3", "="]).unwrap();
        match cli.command {
            Commands::Press(args) => {
                assert_eq!(args.keys, ["12", "+", "3", "="]);
                assert!(!args.steps);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_press_minus_key() {
        let cli = Cli::try_parse_from(["deskcalc", "press", "9", "-", "4", "="]).unwrap();
        assert!(matches!(cli.command, Commands::Press(args) if args.keys[1] == "-"));
    }

    #[test]
    fn test_parse_press_requires_keys() {
        assert!(Cli::try_parse_from(["deskcalc", "press"]).is_err());
    }

    #[test]
    fn test_parse_fit_negative() {
        let cli = Cli::try_parse_from(["deskcalc", "fit", "-1234567890123"]).unwrap();
        assert!(matches!(cli.command, Commands::Fit(args) if args.text == "-1234567890123"));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "deskcalc", "-vv", "--color", "never", "--format", "json", "tui",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorArg::Never);
        assert_eq!(cli.format, FormatArg::Json);
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }
}
