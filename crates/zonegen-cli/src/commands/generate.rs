//! `zonegen generate`: validate a zone file and write one Terraform
//! document per selected provider.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, instrument};

use zonegen_adapters::{LocalFilesystem, TerraformJsonRenderer, YamlZoneSource};
use zonegen_core::{
    application::{GenerateRequest, GenerateService, GeneratedPlan},
    domain::Provider,
    error::Context,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Summary line for `--output-format json`.
#[derive(Debug, Serialize)]
struct PlanSummary<'a> {
    provider: Provider,
    path: &'a std::path::Path,
    record_sets: usize,
    written: bool,
}

#[instrument(skip_all, fields(dry_run = args.dry_run, stdout = args.stdout))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    info!(
        zonefile = %request.zonefile.display(),
        deploy_env = %request.backend.deploy_env,
        "Generating"
    );

    let service = GenerateService::new(
        Box::new(YamlZoneSource::new()),
        Box::new(
            TerraformJsonRenderer::new().with_provider_region(&config.deploy.provider_region),
        ),
        Box::new(LocalFilesystem::new()),
    )
    .with_policy(config.validation)
    .with_key_strategy(config.generation.key_strategy);

    if args.stdout {
        let plans = service.plan(&request)?;
        return print_documents(&output, &plans);
    }

    let written = !args.dry_run;
    let plans = if written {
        service.generate(&request)?
    } else {
        service.plan(&request)?
    };

    if output.format() == OutputFormat::Json {
        let summary: Vec<_> = plans
            .iter()
            .map(|plan| PlanSummary {
                provider: plan.provider,
                path: &plan.path,
                record_sets: plan.record_sets,
                written,
            })
            .collect();
        output.json(&summary)?;
        return Ok(());
    }

    for plan in &plans {
        let line = format!(
            "{}: {} ({} record set(s))",
            plan.provider,
            plan.path.display(),
            plan.record_sets
        );
        if written {
            output.success(&format!("Wrote {line}"))?;
        } else {
            output.info(&format!("Would write {line}"))?;
        }
    }
    Ok(())
}

/// Resolve flags and configuration into a generation request.
///
/// Flags win over configuration. Provider, zone file and deploy env have no
/// defaults; each missing one names the variable that sets it.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerateRequest> {
    let selection = args
        .provider
        .as_deref()
        .or(config.deploy.providers.as_deref())
        .ok_or(CliError::MissingSetting {
            key: "providers",
            env_var: "PROVIDERS",
            flag: Some("--provider <PROVIDER>"),
        })?;
    let providers = Provider::parse_selection(selection)?;

    let zonefile = args
        .zonefile
        .clone()
        .or_else(|| config.zone.zonefile.clone())
        .ok_or(CliError::MissingSetting {
            key: "zonefile",
            env_var: "ZONEFILE",
            flag: Some("--zonefile <FILE>"),
        })?;

    let deploy_env = config
        .deploy
        .deploy_env
        .as_deref()
        .ok_or(CliError::MissingSetting {
            key: "deploy_env",
            env_var: "DEPLOY_ENV",
            flag: None,
        })?;

    Ok(GenerateRequest {
        backend: config.backend(deploy_env, &zonefile),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.zone.output_dir.clone()),
        deployment: config.deployment(),
        providers,
        zonefile,
    })
}

/// One provider prints its document as is; several print a JSON object
/// keyed by provider.
fn print_documents(output: &OutputManager, plans: &[GeneratedPlan]) -> CliResult<()> {
    if let [plan] = plans {
        output.raw(&plan.document)?;
        return Ok(());
    }

    let mut documents = BTreeMap::new();
    for plan in plans {
        let value: serde_json::Value = serde_json::from_str(&plan.document)
            .context(format!("rendered {} document is not JSON", plan.provider))?;
        documents.insert(plan.provider.as_str(), value);
    }
    output.json(&documents)?;
    Ok(())
}
