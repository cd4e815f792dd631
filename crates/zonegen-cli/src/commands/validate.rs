//! `zonegen validate`: check zone files and report every problem found.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use zonegen_adapters::{YamlZoneSource, discover_zone_files};
use zonegen_core::{
    application::{ApplicationError, ValidationReport, ValidationService},
    error::ZonegenError,
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Result for one file, as printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct FileOutcome {
    path: PathBuf,
    origin: Option<String>,
    records: usize,
    valid: bool,
    errors: Vec<String>,
}

impl From<ValidationReport> for FileOutcome {
    fn from(report: ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            origin: Some(report.origin).filter(|o| !o.is_empty()),
            records: report.record_count,
            path: report.path,
            errors: report.errors,
        }
    }
}

#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let targets = resolve_targets(args.paths, &config)?;
    let files = expand_targets(&targets)?;

    let service =
        ValidationService::with_policy(Box::new(YamlZoneSource::new()), config.validation);

    let outcomes = files
        .iter()
        .map(|path| check_file(&service, path))
        .collect::<CliResult<Vec<_>>>()?;

    let invalid = outcomes.iter().filter(|o| !o.valid).count();

    if output.format() == OutputFormat::Json {
        output.json(&outcomes)?;
    } else {
        print_outcomes(&output, &outcomes)?;
    }

    if invalid > 0 {
        return Err(CliError::ZonesInvalid {
            invalid,
            total: outcomes.len(),
        });
    }
    Ok(())
}

/// Paths given on the command line, else the configured zone file.
fn resolve_targets(paths: Vec<PathBuf>, config: &AppConfig) -> CliResult<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths);
    }
    config
        .zone
        .zonefile
        .clone()
        .map(|zonefile| vec![zonefile])
        .ok_or(CliError::MissingSetting {
            key: "zonefile",
            env_var: "ZONEFILE",
            flag: Some("a PATH argument"),
        })
}

/// Replace directories with the zone files found beneath them.
fn expand_targets(targets: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for target in targets {
        if target.is_dir() {
            let found = discover_zone_files(target)?;
            if found.is_empty() {
                return Err(CliError::InvalidInput {
                    message: format!("no zone files found under {}", target.display()),
                    source: None,
                });
            }
            debug!(dir = %target.display(), files = found.len(), "Directory expanded");
            files.extend(found);
        } else {
            files.push(target.clone());
        }
    }
    Ok(files)
}

/// A file that cannot be parsed is reported like any other invalid zone.
fn check_file(service: &ValidationService, path: &Path) -> CliResult<FileOutcome> {
    match service.validate(path) {
        Ok(report) => Ok(report.into()),
        Err(ZonegenError::Application(ApplicationError::ZoneParse { reason, .. })) => {
            Ok(FileOutcome {
                path: path.to_path_buf(),
                origin: None,
                records: 0,
                valid: false,
                errors: vec![format!("Could not parse zone file: {reason}")],
            })
        }
        Err(e) => Err(e.into()),
    }
}

fn print_outcomes(output: &OutputManager, outcomes: &[FileOutcome]) -> CliResult<()> {
    for outcome in outcomes {
        let path = outcome.path.display();
        if outcome.valid {
            output.success(&format!("{path}: {} record(s), no errors", outcome.records))?;
        } else {
            output.error(&format!("{path}: {} error(s)", outcome.errors.len()))?;
            for err in &outcome.errors {
                output.raw(&format!("  • {err}"))?;
            }
        }
    }

    if outcomes.len() > 1 {
        let valid = outcomes.iter().filter(|o| o.valid).count();
        output.print("")?;
        output.info(&format!("{valid} of {} zone file(s) valid", outcomes.len()))?;
    }
    Ok(())
}
