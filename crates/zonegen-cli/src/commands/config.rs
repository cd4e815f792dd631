//! `zonegen config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            match value {
                toml::Value::String(s) => output.raw(&s)?,
                other => output.raw(&other.to_string())?,
            }
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.raw(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.raw(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `deploy.region`.
///
/// Unset optional values are reported as unknown keys.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<toml::Value> {
    let root = toml::Value::try_from(config).with_cli_context(|| "Failed to serialise config")?;

    key.split('.')
        .try_fold(&root, |value, part| value.get(part))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown or unset config key: '{key}'"),
            source: None,
        })
}

// ── tests ─────────────────────────────────────────────────────────────────────
