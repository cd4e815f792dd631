//! Everything `zonegen` prints on stdout.
//!
//! Status lines (`✓`, `✗`, `⚠`, `ℹ`) are for people and respect `--quiet`
//! and colour settings. [`OutputManager::raw`] and [`OutputManager::json`]
//! carry documents and reports and are always printed verbatim.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Clone, Copy)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Error => "\u{2717}",   // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }
}

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            // Plain and JSON output are meant for pipes and files.
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unadorned line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    /// Printed even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    /// Documents, CSV and bare values. Never suppressed.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Pretty JSON. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.quiet && !matches!(status, Status::Error) {
            return Ok(());
        }
        self.term.write_line(&self.status_line(status, msg))
    }

    fn status_line(&self, status: Status, msg: &str) -> String {
        if self.no_color {
            format!("{} {msg}", status.symbol())
        } else {
            format!(
                "{} {}",
                status.symbol().style(status.style().bold()),
                msg.style(status.style())
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(manager(false, false, OutputFormat::Plain).format(), OutputFormat::Plain);
        assert_eq!(manager(false, false, OutputFormat::Json).format(), OutputFormat::Json);
    }

    #[test]
    fn colour_only_for_human_output() {
        assert!(!manager(false, false, OutputFormat::Human).no_color);
        assert!(manager(false, true, OutputFormat::Human).no_color);
        assert!(manager(false, false, OutputFormat::Plain).no_color);
        assert!(manager(false, false, OutputFormat::Json).no_color);
    }

    #[test]
    fn config_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn plain_status_lines_carry_symbols() {
        let out = manager(false, false, OutputFormat::Plain);
        assert_eq!(out.status_line(Status::Success, "ok"), "\u{2713} ok");
        assert_eq!(out.status_line(Status::Error, "bad"), "\u{2717} bad");
    }

    #[test]
    fn coloured_status_lines_keep_the_message() {
        let out = manager(false, false, OutputFormat::Human);
        let line = out.status_line(Status::Warning, "careful");
        assert!(line.contains("careful"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn quiet_still_writes_errors_and_machine_output() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.print("hidden").is_ok());
        assert!(out.error("something went wrong").is_ok());
        assert!(out.json(&serde_json::json!({ "valid": true })).is_ok());
        assert!(out.raw("{}").is_ok());
    }
}
