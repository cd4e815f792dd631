//! Command handlers, one module per subcommand.
//!
//! Every handler takes its parsed arguments plus whatever it needs from
//! [`AppConfig`](crate::config::AppConfig) and the
//! [`OutputManager`](crate::output::OutputManager), and returns
//! [`CliResult`](crate::error::CliResult).

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod providers;
pub mod validate;
