//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Deployment variables (`ZONEFILE`, `DEPLOY_ENV`, `PROVIDERS`, ...)
//! 3. `ZONEGEN__SECTION__KEY` environment variables
//! 4. Config file (`--config`, else the platform config dir)
//! 5. Built-in defaults (always present)

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use zonegen_core::domain::{
    BackendSettings, DeploymentConfig, KeyStrategy, Provider, ValidationPolicy, statefile_name,
};
use zonegen_adapters::DEFAULT_PROVIDER_REGION;

/// Default directory generated documents are written under.
pub const DEFAULT_OUTPUT_DIR: &str = "tf-tmp";

/// Deployment variables and the config keys they override.
pub const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("ZONEFILE", "zone.zonefile"),
    ("DEPLOY_ENV", "deploy.deploy_env"),
    ("REGION", "deploy.region"),
    ("BUCKET_NAME", "deploy.bucket"),
    ("PROVIDERS", "deploy.providers"),
    ("GOOGLE_ZONE_NAME", "gcp.zone_name"),
    ("GOOGLE_DNS_NAME", "gcp.dns_name"),
    ("ROUTE53_ZONE_ID", "aws.zone_id"),
];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which zone file to read and where documents go.
    pub zone: ZoneConfig,
    /// Remote state and provider selection.
    pub deploy: DeployConfig,
    pub gcp: GcpConfig,
    pub aws: AwsConfig,
    /// Validator toggles.
    pub validation: ValidationPolicy,
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub zonefile: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            zonefile: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub deploy_env: Option<String>,
    /// Region of the state bucket.
    pub region: String,
    /// Overrides `dns-state-bucket-<deploy_env>`.
    pub bucket: Option<String>,
    /// `gcp`, `aws` or `all`.
    pub providers: Option<String>,
    /// Region written into the Terraform provider block.
    pub provider_region: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            deploy_env: None,
            region: "eu-west-1".into(),
            bucket: None,
            providers: None,
            provider_region: DEFAULT_PROVIDER_REGION.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpConfig {
    pub zone_name: Option<String>,
    pub dns_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub key_strategy: KeyStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the file, the process environment and defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with_env(config_file, &env)
    }

    /// Same as [`AppConfig::load`], reading variables from `env` instead of
    /// the process environment.
    pub fn load_with_env(
        config_file: Option<&PathBuf>,
        env: &HashMap<String, String>,
    ) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(&Self::config_path().to_string_lossy(), FileFormat::Toml)
                .required(false),
        };

        let mut builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix("ZONEGEN")
                .prefix_separator("__")
                .separator("__")
                .source(Some(env.clone().into_iter().collect())),
        );

        for (var, key) in LEGACY_ENV_VARS {
            let value = env.get(*var).filter(|v| !v.is_empty()).cloned();
            builder = builder.set_override_option(*key, value)?;
        }

        let config: Self = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.validation.check()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.zonegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "zonegen", "zonegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".zonegen.toml"))
    }

    /// Provider-scoped settings the generator copies into resources.
    pub fn deployment(&self) -> DeploymentConfig {
        let mut deployment = DeploymentConfig::new();
        if let Some(zone_name) = &self.gcp.zone_name {
            deployment.set(Provider::Gcp, "zone_name", zone_name);
        }
        if let Some(dns_name) = &self.gcp.dns_name {
            deployment.set(Provider::Gcp, "dns_name", dns_name);
        }
        if let Some(zone_id) = &self.aws.zone_id {
            deployment.set(Provider::Aws, "zone_id", zone_id);
        }
        deployment
    }

    /// Remote-state settings for `zonefile`, once a deploy env is known.
    pub fn backend(&self, deploy_env: &str, zonefile: &Path) -> BackendSettings {
        let backend = BackendSettings::new(deploy_env, &self.deploy.region)
            .with_statefile(statefile_name(Some(zonefile)));
        match &self.deploy.bucket {
            Some(bucket) => backend.with_bucket(bucket),
            None => backend,
        }
    }
}
