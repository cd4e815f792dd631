//! `zonegen init`: write a configuration file holding every default.

use std::{fs, path::Path};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# zonegen configuration.
#
# Deployment variables (ZONEFILE, DEPLOY_ENV, PROVIDERS, REGION, BUCKET_NAME,
# GOOGLE_ZONE_NAME, GOOGLE_DNS_NAME, ROUTE53_ZONE_ID) override these values,
# as do ZONEGEN__<SECTION>__<KEY> variables.

";

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = args.path.unwrap_or_else(AppConfig::config_path);

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    write_default_config(&path)?;
    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

fn write_default_config(path: &Path) -> CliResult<()> {
    let body = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    fs::write(path, format!("{HEADER}{body}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
