//! Flags accepted by every `zonegen` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Flattened into [`super::Cli`]; each flag is `global` so it may follow the
/// subcommand (`zonegen validate zones/ -v`).
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity. Logs go to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log output (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors and machine output are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and requested documents only"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Replaces the per-user config file. The file must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "ZONEGEN_CONFIG",
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How reports are printed"
    )]
    pub output_format: OutputFormat,
}

/// How reports and listings are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Colored, with status symbols.
    Human,
    /// No ANSI codes; safe for logs and pipes.
    Plain,
    /// One JSON value per command.
    Json,
}
