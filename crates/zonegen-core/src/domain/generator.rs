//! Resource generation: a flat record list becomes one record set per
//! `(subdomain, record_type)` pair, keyed so repeated runs over the same zone
//! produce identical Terraform state addresses.
//!
//! Input is assumed to have passed [`ZoneValidator`](crate::domain::ZoneValidator);
//! invalid records still generate, just not into anything useful.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use md5::{Digest, Md5};
use tracing::{debug, instrument, warn};

use crate::domain::{
    entities::{DeploymentConfig, GeneratedResources, Record, RecordSet},
    grammar,
    providers,
    value_objects::{KeyStrategy, Provider},
};

/// Records sharing one subdomain and type, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup<'a> {
    pub subdomain: &'a str,
    pub record_type: &'a str,
    pub records: Vec<&'a Record>,
}

/// Bucket records by `(subdomain, record_type)`, groups in first-seen order.
pub fn group_records(records: &[Record]) -> Vec<RecordGroup<'_>> {
    let mut groups: Vec<RecordGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let id = (record.subdomain(), record.record_type());
        match index.get(&id) {
            Some(&i) => groups[i].records.push(record),
            None => {
                index.insert(id, groups.len());
                groups.push(RecordGroup {
                    subdomain: id.0,
                    record_type: id.1,
                    records: vec![record],
                });
            }
        }
    }

    groups
}

/// Subdomain rewritten into characters Terraform allows in resource names.
pub fn safe_title(subdomain: &str) -> String {
    subdomain
        .replace('.', "_")
        .replace('@', "AT")
        .replace('*', "WILDCARD")
}

/// `<record_type>_<safe subdomain>`, e.g. `NS_AT` or `CNAME_WILDCARD_cdn`.
pub fn resource_key(record_type: &str, subdomain: &str) -> String {
    format!("{}_{}", record_type, safe_title(subdomain))
}

/// Hex MD5 of a title, the group's data values and its type.
///
/// Data is sorted first, so the digest ignores value order but changes with
/// any title, type or content change.
pub fn record_digest(title: &str, data: &[String], record_type: &str) -> String {
    let mut sorted: Vec<&str> = data.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut hasher = Md5::new();
    hasher.update(title.as_bytes());
    hasher.update(sorted.join(" ").as_bytes());
    hasher.update(record_type.as_bytes());

    hasher
        .finalize()
        .iter()
        .fold(String::with_capacity(32), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// `<safe subdomain>_<record_digest>`.
pub fn digest_key(subdomain: &str, data: &[String], record_type: &str) -> String {
    let title = safe_title(subdomain);
    let digest = record_digest(&title, data, record_type);
    format!("{title}_{digest}")
}

/// First free variant of a taken key.
///
/// `a.b` and `a_b` share a safe title, so the raw name's digest is appended,
/// 8 hex digits first and the full digest if needed. A numeric suffix covers
/// keys that already look like a disambiguated one.
fn disambiguate(key: &str, subdomain: &str, record_type: &str, used: &HashSet<String>) -> String {
    let raw = record_digest(subdomain, &[], record_type);
    [8, raw.len()]
        .into_iter()
        .map(|len| format!("{key}_{}", &raw[..len]))
        .chain((2..).map(|n| format!("{key}_{raw}_{n}")))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| format!("{key}_{raw}"))
}

/// Generates provider resources from validated records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceGenerator {
    key_strategy: KeyStrategy,
}

impl ResourceGenerator {
    pub fn new(key_strategy: KeyStrategy) -> Self {
        Self { key_strategy }
    }

    pub fn key_strategy(&self) -> KeyStrategy {
        self.key_strategy
    }

    /// Build the record sets for one provider.
    ///
    /// Pure: the records are only read, and the same input always yields the
    /// same keys and the same order.
    #[instrument(skip_all, fields(provider = %provider, origin = origin, records = records.len()))]
    pub fn generate(
        &self,
        provider: Provider,
        origin: &str,
        records: &[Record],
        deployment: &DeploymentConfig,
    ) -> GeneratedResources {
        let profile = providers::profile(provider);
        let zone = deployment
            .get(provider, profile.zone_setting)
            .map(str::to_string);

        let mut used_keys = HashSet::new();
        let mut record_sets = Vec::new();

        for group in group_records(records) {
            let data: Vec<String> = group
                .records
                .iter()
                .map(|r| profile.split_line(r.data()))
                .collect();

            let mut key = match self.key_strategy {
                KeyStrategy::TypeAndName => resource_key(group.record_type, group.subdomain),
                KeyStrategy::ContentDigest => digest_key(group.subdomain, &data, group.record_type),
            };
            if used_keys.contains(&key) {
                key = disambiguate(&key, group.subdomain, group.record_type, &used_keys);
                warn!(key = %key, subdomain = group.subdomain, "Resource key collision, disambiguated");
            }
            used_keys.insert(key.clone());

            let ttl = group
                .records
                .iter()
                .filter_map(|r| grammar::parse_ttl(r.ttl()))
                .min();

            record_sets.push(RecordSet {
                key,
                zone: zone.clone(),
                name: profile.record_name(group.subdomain, origin),
                record_type: group.record_type.to_string(),
                ttl,
                data,
            });
        }

        debug!(record_sets = record_sets.len(), "Resources generated");
        GeneratedResources::new(provider, record_sets)
    }
}
