//! Provider-specific deployment parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Provider;

/// Opaque per-provider settings, e.g. `{"gcp": {"zone_name": "my-zone"}}`.
///
/// The generator reads the keys named by each provider's profile and copies
/// the values into the generated attributes untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentConfig {
    providers: BTreeMap<String, BTreeMap<String, String>>,
}

impl DeploymentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one provider value.
    pub fn with(mut self, provider: Provider, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(provider, key, value);
        self
    }

    pub fn set(&mut self, provider: Provider, key: impl Into<String>, value: impl Into<String>) {
        self.providers
            .entry(provider.as_str().to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, provider: Provider, key: &str) -> Option<&str> {
        self.providers
            .get(provider.as_str())
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// All values configured for one provider.
    pub fn values(&self, provider: Provider) -> impl Iterator<Item = (&str, &str)> {
        self.providers
            .get(provider.as_str())
            .into_iter()
            .flat_map(|values| values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
