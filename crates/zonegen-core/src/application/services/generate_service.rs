//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Check provider deployment settings
//! 2. Load the zone file and run the validation gate
//! 3. Generate and render resources per provider
//! 4. Write each document to `<output_dir>/<provider>/<file name>`

use std::path::PathBuf;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PlanRenderer, ZoneSource},
    },
    domain::{
        BackendSettings, DeploymentConfig, KeyStrategy, Provider, ResourceGenerator,
        ValidationPolicy, ZoneValidator, profile,
    },
    error::{ZonegenError, ZonegenResult},
};

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub zonefile: PathBuf,
    pub providers: Vec<Provider>,
    pub deployment: DeploymentConfig,
    pub backend: BackendSettings,
    pub output_dir: PathBuf,
}

/// A rendered document for one provider, and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub provider: Provider,
    pub path: PathBuf,
    pub document: String,
    pub record_sets: usize,
}

/// Validates, generates, renders and writes provider documents.
pub struct GenerateService {
    source: Box<dyn ZoneSource>,
    renderer: Box<dyn PlanRenderer>,
    filesystem: Box<dyn Filesystem>,
    validator: ZoneValidator,
    generator: ResourceGenerator,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use zonegen_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     source,     // impl ZoneSource
    ///     renderer,   // impl PlanRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        source: Box<dyn ZoneSource>,
        renderer: Box<dyn PlanRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
            validator: ZoneValidator::default(),
            generator: ResourceGenerator::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validator = ZoneValidator::new(policy);
        self
    }

    #[must_use]
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.generator = ResourceGenerator::new(key_strategy);
        self
    }

    /// Render every selected provider's document without writing anything.
    #[instrument(
        skip_all,
        fields(
            zonefile = %request.zonefile.display(),
            providers = request.providers.len()
        )
    )]
    pub fn plan(&self, request: &GenerateRequest) -> ZonegenResult<Vec<GeneratedPlan>> {
        if request.providers.is_empty() {
            return Err(ZonegenError::Configuration {
                message: "no providers selected".into(),
            });
        }
        for &provider in &request.providers {
            check_settings(provider, &request.deployment)?;
        }

        let zone = self.source.load(&request.zonefile)?;
        let errors = self.validator.get_zone_errors(&zone);
        if !errors.is_empty() {
            return Err(ApplicationError::ValidationFailed {
                path: request.zonefile.clone(),
                errors,
            }
            .into());
        }

        let mut plans = Vec::with_capacity(request.providers.len());
        for &provider in &request.providers {
            let resources = self.generator.generate(
                provider,
                zone.origin(),
                zone.records(),
                &request.deployment,
            );
            let document = self.renderer.render(&resources, &request.backend)?;
            let path = request
                .output_dir
                .join(provider.as_str())
                .join(self.renderer.file_name());

            info!(%provider, record_sets = resources.len(), "Resources rendered");

            plans.push(GeneratedPlan {
                provider,
                path,
                document,
                record_sets: resources.len(),
            });
        }

        Ok(plans)
    }

    /// Plan, then write every document through the filesystem port.
    pub fn generate(&self, request: &GenerateRequest) -> ZonegenResult<Vec<GeneratedPlan>> {
        let plans = self.plan(request)?;

        for plan in &plans {
            if let Some(parent) = plan.path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&plan.path, &plan.document)?;
            info!(path = %plan.path.display(), "Document written");
        }

        Ok(plans)
    }
}

fn check_settings(provider: Provider, deployment: &DeploymentConfig) -> ZonegenResult<()> {
    for setting in profile(provider).required_settings {
        if deployment
            .get(provider, setting.key)
            .is_none_or(str::is_empty)
        {
            return Err(ApplicationError::MissingDeploymentSetting {
                provider: provider.to_string(),
                key: setting.key,
                env_var: setting.env_var,
            }
            .into());
        }
    }
    Ok(())
}
