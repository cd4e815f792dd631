//! Remote state settings for generated Terraform documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Statefile used when no zone file names one.
pub const DEFAULT_STATEFILE: &str = "terraform.tfstate";

/// Where Terraform keeps state for a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    pub deploy_env: String,
    pub region: String,
    pub bucket: String,
    pub statefile: String,
}

impl BackendSettings {
    /// Settings with the bucket derived from the deploy environment.
    pub fn new(deploy_env: impl Into<String>, region: impl Into<String>) -> Self {
        let deploy_env = deploy_env.into();
        Self {
            bucket: default_bucket(&deploy_env),
            deploy_env,
            region: region.into(),
            statefile: DEFAULT_STATEFILE.to_string(),
        }
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn with_statefile(mut self, statefile: impl Into<String>) -> Self {
        self.statefile = statefile.into();
        self
    }

    /// State key inside the bucket, namespaced by provider.
    pub fn state_key(&self, provider: &str) -> String {
        format!("{}/{}", provider, self.statefile)
    }
}

pub fn default_bucket(deploy_env: &str) -> String {
    format!("dns-state-bucket-{deploy_env}")
}

/// Derive a statefile name from the zone file path.
///
/// `some/path/foo.bar.baz.yaml` becomes `foo-bar-baz.tfstate`.
pub fn statefile_name(zonefile: Option<&Path>) -> String {
    let Some(name) = zonefile.and_then(Path::file_name).and_then(|n| n.to_str()) else {
        return DEFAULT_STATEFILE.to_string();
    };
    let stem = name
        .strip_suffix(".yaml")
        .or_else(|| name.strip_suffix(".yml"))
        .unwrap_or(name);
    format!("{}.tfstate", stem.replace('.', "-"))
}
