//! Tracing subscriber set-up for the `zonegen` binary.
//!
//! `zonegen-core` and `zonegen-adapters` emit spans and events only; this is
//! the one place a subscriber is installed. Events go to stderr so stdout
//! stays clean for Terraform documents and JSON reports.
//!
//! `-q` gives ERROR, no flag WARN, then `-v` INFO, `-vv` DEBUG, `-vvv` TRACE.
//! `RUST_LOG` replaces the derived filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events the derived filter lets through.
const CRATES: &[&str] = &["zonegen", "zonegen_core", "zonegen_adapters"];

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        // Targets are noise until someone is debugging.
        .with_target(level >= LevelFilter::DEBUG)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `zonegen=info,zonegen_core=info,...`
fn directives(level: LevelFilter) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
