//! `zonegen providers`: list supported DNS providers.

use serde::Serialize;

use zonegen_core::domain::{PROVIDER_REGISTRY, ProviderProfile};

use crate::{
    cli::{ListFormat, OutputFormat, ProvidersArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ProviderRow {
    name: &'static str,
    resource_type: &'static str,
    terraform_provider: &'static str,
    terraform_version: &'static str,
    required_env: Vec<&'static str>,
}

impl From<&ProviderProfile> for ProviderRow {
    fn from(profile: &ProviderProfile) -> Self {
        Self {
            name: profile.provider.as_str(),
            resource_type: profile.resource_type,
            terraform_provider: profile.terraform_provider,
            terraform_version: profile.terraform_version,
            required_env: profile.required_settings.iter().map(|s| s.env_var).collect(),
        }
    }
}

pub fn execute(args: ProvidersArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<ProviderRow> = PROVIDER_REGISTRY.iter().map(|p| (*p).into()).collect();

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Supported providers:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:<5} {:<22} {} {}  (requires {})",
                    row.name,
                    row.resource_type,
                    row.terraform_provider,
                    row.terraform_version,
                    row.required_env.join(", ")
                ))?;
            }
            output.print("")?;
            output.print("  Use 'all' to generate for every provider.")?;
        }
        ListFormat::List => {
            for row in &rows {
                output.raw(row.name)?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::Csv => {
            for line in csv_lines(&rows) {
                output.raw(&line)?;
            }
        }
    }

    Ok(())
}

fn csv_lines(rows: &[ProviderRow]) -> Vec<String> {
    let mut lines = vec!["name,resource_type,terraform_provider,terraform_version,required_env".to_string()];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{},{},{},{},{}",
            row.name,
            row.resource_type,
            row.terraform_provider,
            row.terraform_version,
            row.required_env.join(";")
        )
    }));
    lines
}
