//! Provider profile registry.
//!
//! Each provider is described exactly once by its [`ProviderProfile`]: the
//! Terraform resource it maps to, how record names are written, and how long
//! TXT values are split into quoted segments.
//!
//! # Adding a New Provider
//!
//! 1. Add a variant to `Provider` in `value_objects.rs`
//! 2. Add a `ProviderProfile` static below and an arm in [`profile`]
//! 3. Add it to [`PROVIDER_REGISTRY`]

use crate::domain::value_objects::Provider;

/// Longest character-string a TXT record can hold on the wire.
pub const TXT_SEGMENT_LIMIT: usize = 255;

/// DMARC values longer than this are split at their `;`/`,` delimiters.
pub const DMARC_SPLIT_THRESHOLD: usize = 254;

const DMARC_MARKER: &str = "v=DMARC1";

/// How a provider expects record names to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// `<subdomain>.<origin>`, and the bare origin for the apex.
    Qualified,
    /// `<subdomain>` alone, and an empty name for the apex.
    Relative,
}

/// A deployment setting the provider cannot generate without.
#[derive(Debug, Clone, Copy)]
pub struct RequiredSetting {
    /// Key inside [`DeploymentConfig`](crate::domain::DeploymentConfig).
    pub key: &'static str,
    /// Environment variable operators set it with.
    pub env_var: &'static str,
}

/// Everything the generator needs to know about one provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile {
    pub provider: Provider,

    /// Terraform resource type, e.g. `aws_route53_record`.
    pub resource_type: &'static str,

    /// Attribute holding the list of record values.
    pub data_field: &'static str,

    /// Attribute identifying the hosted zone, and the deployment key it is
    /// copied from.
    pub zone_attribute: &'static str,
    pub zone_setting: &'static str,

    pub name_style: NameStyle,

    /// Joins consecutive 255-character chunks of a long value.
    pub chunk_separator: &'static str,

    /// Replace `;` and `,` when a long DMARC policy is re-split.
    pub dmarc_semicolon: &'static str,
    pub dmarc_comma: &'static str,

    /// Terraform provider block name and pinned version.
    pub terraform_provider: &'static str,
    pub terraform_version: &'static str,

    pub required_settings: &'static [RequiredSetting],
}

pub static GCP: ProviderProfile = ProviderProfile {
    provider: Provider::Gcp,
    resource_type: "google_dns_record_set",
    data_field: "rrdatas",
    zone_attribute: "managed_zone",
    zone_setting: "zone_name",
    name_style: NameStyle::Qualified,
    chunk_separator: " ",
    dmarc_semicolon: "; ",
    dmarc_comma: ", ",
    terraform_provider: "google",
    terraform_version: "1.15.0",
    required_settings: &[
        RequiredSetting {
            key: "zone_name",
            env_var: "GOOGLE_ZONE_NAME",
        },
        RequiredSetting {
            key: "dns_name",
            env_var: "GOOGLE_DNS_NAME",
        },
    ],
};

// Route 53 takes TXT segments as `"a""b"`; the outer quotes are added by the
// provider, so only the inner `""` boundary is emitted here.
pub static AWS: ProviderProfile = ProviderProfile {
    provider: Provider::Aws,
    resource_type: "aws_route53_record",
    data_field: "records",
    zone_attribute: "zone_id",
    zone_setting: "zone_id",
    name_style: NameStyle::Relative,
    chunk_separator: "\"\"",
    dmarc_semicolon: ";\"\"",
    dmarc_comma: ",\"\"",
    terraform_provider: "aws",
    terraform_version: "1.26.0",
    required_settings: &[RequiredSetting {
        key: "zone_id",
        env_var: "ROUTE53_ZONE_ID",
    }],
};

/// Every supported provider, in `Provider::ALL` order.
pub static PROVIDER_REGISTRY: &[&ProviderProfile] = &[&GCP, &AWS];

pub const fn profile(provider: Provider) -> &'static ProviderProfile {
    match provider {
        Provider::Gcp => &GCP,
        Provider::Aws => &AWS,
    }
}

impl ProviderProfile {
    /// Name of the record set for `subdomain` inside `origin`.
    pub fn record_name(&self, subdomain: &str, origin: &str) -> String {
        match (self.name_style, subdomain) {
            (NameStyle::Qualified, "@") => origin.to_string(),
            (NameStyle::Qualified, sub) => format!("{sub}.{origin}"),
            (NameStyle::Relative, "@") => String::new(),
            (NameStyle::Relative, sub) => sub.to_string(),
        }
    }

    /// Rewrite one record value into the provider's long-value syntax.
    ///
    /// Long DMARC policies are split at their delimiters; everything else is
    /// cut into 255-character chunks. Short values come back unchanged.
    pub fn split_line(&self, data: &str) -> String {
        if data.contains(DMARC_MARKER) && data.chars().count() > DMARC_SPLIT_THRESHOLD {
            let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
            let rejoined = rejoin(&compact, ';', self.dmarc_semicolon);
            return rejoin(&rejoined, ',', self.dmarc_comma);
        }

        let chars: Vec<char> = data.chars().collect();
        chars
            .chunks(TXT_SEGMENT_LIMIT)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(self.chunk_separator)
    }
}

/// Split on `delimiter` and join with `separator`; trailing empty segments
/// are dropped, so a policy ending in `;` does not end in a separator.
fn rejoin(value: &str, delimiter: char, separator: &str) -> String {
    let mut parts: Vec<&str> = value.split(delimiter).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.join(separator)
}
