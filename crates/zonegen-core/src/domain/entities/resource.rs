//! Generated infrastructure resources.
//!
//! A [`GeneratedResources`] value serialises to exactly the `resource` block
//! Terraform expects:
//!
//! ```text
//! { "<resource type>": { "<key>": { "<zone attr>": .., "name": .., "type": ..,
//!                                    "ttl": .., "<data field>": [..] } } }
//! ```
//!
//! Attribute names come from the provider's profile, so the same entity
//! serves every provider.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{
    providers::{self, ProviderProfile},
    value_objects::Provider,
};

/// One generated record set: every record sharing a subdomain and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    /// Stable resource key, e.g. `NS_AT`.
    pub key: String,
    /// Hosted-zone identifier copied from the deployment config.
    pub zone: Option<String>,
    pub name: String,
    pub record_type: String,
    /// Smallest TTL in the group; `None` only for unvalidated input.
    pub ttl: Option<u64>,
    pub data: Vec<String>,
}

/// All record sets generated for one provider, in first-seen group order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResources {
    provider: Provider,
    record_sets: Vec<RecordSet>,
}

impl GeneratedResources {
    pub fn new(provider: Provider, record_sets: Vec<RecordSet>) -> Self {
        Self {
            provider,
            record_sets,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn profile(&self) -> &'static ProviderProfile {
        providers::profile(self.provider)
    }

    /// Terraform resource type all record sets are emitted under.
    pub fn resource_type(&self) -> &'static str {
        self.profile().resource_type
    }

    pub fn record_sets(&self) -> &[RecordSet] {
        &self.record_sets
    }

    pub fn get(&self, key: &str) -> Option<&RecordSet> {
        self.record_sets.iter().find(|set| set.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.record_sets.iter().map(|set| set.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.record_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_sets.is_empty()
    }
}

impl Serialize for GeneratedResources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_map(Some(1))?;
        outer.serialize_entry(self.resource_type(), &RecordSetMap(self))?;
        outer.end()
    }
}

struct RecordSetMap<'a>(&'a GeneratedResources);

impl Serialize for RecordSetMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let profile = self.0.profile();
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for set in self.0.record_sets() {
            map.serialize_entry(&set.key, &Attributes { set, profile })?;
        }
        map.end()
    }
}

struct Attributes<'a> {
    set: &'a RecordSet,
    profile: &'static ProviderProfile,
}

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(self.profile.zone_attribute, &self.set.zone)?;
        map.serialize_entry("name", &self.set.name)?;
        map.serialize_entry("type", &self.set.record_type)?;
        map.serialize_entry("ttl", &self.set.ttl)?;
        map.serialize_entry(self.profile.data_field, &self.set.data)?;
        map.end()
    }
}
