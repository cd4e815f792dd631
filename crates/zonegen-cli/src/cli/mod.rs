//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No zone logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "zonegen",
    bin_name = "zonegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate DNS zone files and generate Terraform for them",
    long_about = "zonegen checks YAML zone files field by field and turns valid \
                  zones into Terraform JSON for Google Cloud DNS and AWS Route 53.",
    after_help = "EXAMPLES:\n\
        \x20 zonegen validate zones/\n\
        \x20 zonegen generate --provider all --zonefile zones/example.com.yaml\n\
        \x20 zonegen generate -p aws -z zones/example.com.yaml --stdout\n\
        \x20 zonegen completions bash > /usr/share/bash-completion/completions/zonegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check zone files and report every problem found.
    #[command(
        visible_alias = "check",
        about = "Validate zone files",
        after_help = "EXAMPLES:\n\
            \x20 zonegen validate                       # uses ZONEFILE\n\
            \x20 zonegen validate zones/example.com.yaml\n\
            \x20 zonegen validate zones/ --output-format json"
    )]
    Validate(ValidateArgs),

    /// Generate Terraform documents from a zone file.
    #[command(
        visible_alias = "gen",
        about = "Generate Terraform for a zone",
        after_help = "EXAMPLES:\n\
            \x20 zonegen generate -p gcp -z zones/example.com.yaml\n\
            \x20 zonegen generate -p all -z zones/example.com.yaml -o build/\n\
            \x20 zonegen generate -p aws -z zones/example.com.yaml --dry-run"
    )]
    Generate(GenerateArgs),

    /// List supported DNS providers.
    #[command(
        visible_alias = "ls",
        about = "List supported providers",
        after_help = "EXAMPLES:\n\
            \x20 zonegen providers\n\
            \x20 zonegen providers --format json"
    )]
    Providers(ProvidersArgs),

    /// Initialise a zonegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 zonegen init                  # default location\n\
            \x20 zonegen init --path zonegen.toml\n\
            \x20 zonegen init --force          # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 zonegen completions bash > ~/.local/share/bash-completion/completions/zonegen\n\
            \x20 zonegen completions zsh  > ~/.zfunc/_zonegen\n\
            \x20 zonegen completions fish > ~/.config/fish/completions/zonegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the zonegen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 zonegen config get deploy.region\n\
            \x20 zonegen config list\n\
            \x20 zonegen config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `zonegen validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Zone files or directories.  Directories are searched for `*.yaml`
    /// and `*.yml` files.  Defaults to the configured zone file.
    #[arg(value_name = "PATH", help = "Zone files or directories to validate")]
    pub paths: Vec<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `zonegen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Provider to generate for.
    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        help = "Provider: gcp, aws or all (default: PROVIDERS)"
    )]
    pub provider: Option<String>,

    /// Zone file to read.
    #[arg(
        short = 'z',
        long = "zonefile",
        value_name = "FILE",
        help = "Zone file (default: ZONEFILE)"
    )]
    pub zonefile: Option<PathBuf>,

    /// Directory documents are written under, one subdirectory per provider.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: tf-tmp)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Render everything but write nothing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Print the rendered documents instead of writing them.
    #[arg(long = "stdout", conflicts_with = "dry_run", help = "Print documents to stdout")]
    pub stdout: bool,
}

// ── providers ─────────────────────────────────────────────────────────────────

/// Arguments for `zonegen providers`.
#[derive(Debug, Args)]
pub struct ProvidersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `providers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `zonegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write somewhere other than the default config location.
    #[arg(long = "path", value_name = "FILE", help = "Where to write the configuration")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `zonegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `zonegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `deploy.region`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "zonegen",
            "generate",
            "--provider",
            "all",
            "--zonefile",
            "zones/example.com.yaml",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.provider.as_deref(), Some("all"));
                assert_eq!(
                    args.zonefile,
                    Some(PathBuf::from("zones/example.com.yaml"))
                );
                assert!(args.dry_run);
                assert!(!args.stdout);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_many_paths() {
        let cli = Cli::parse_from(["zonegen", "check", "a.yaml", "zones/"]);
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.paths.len(), 2),
            other => panic!("expected Validate, got {other:?}"),
        }
    }

    #[test]
    fn dry_run_and_stdout_conflict() {
        let result = Cli::try_parse_from(["zonegen", "generate", "--dry-run", "--stdout"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["zonegen", "--quiet", "--verbose", "providers"]);
        assert!(result.is_err());
    }
}
