//! Domain value objects: RecordType, Provider, KeyStrategy.
//!
//! # Design
//!
//! These are pure `Copy` value types with no identity.
//! Provider-specific behaviour (resource names, line splitting, naming of the
//! zone apex) lives in `providers.rs`; per-type data grammars live in
//! `grammar.rs`. This file only defines the closed sets, their string forms
//! and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── RecordType ───────────────────────────────────────────────────────────────

/// A DNS record type the zone files are allowed to contain.
///
/// Parsing is exact (`"a"` is not `A`): the zone-file format stores types in
/// upper case and anything else is reported as an unknown type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Ns,
    Mx,
    Txt,
    Cname,
}

impl RecordType {
    pub const ALL: [RecordType; 6] = [
        Self::A,
        Self::Aaaa,
        Self::Ns,
        Self::Mx,
        Self::Txt,
        Self::Cname,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Cname => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRecordType {
                record_type: s.to_string(),
            })
    }
}

// ── Provider ─────────────────────────────────────────────────────────────────

/// A DNS provider resources can be generated for.
///
/// To add a provider: add a variant here, then a `ProviderProfile` entry in
/// `providers.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Cloud DNS.
    Gcp,
    /// AWS Route 53.
    Aws,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Self::Gcp, Self::Aws];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gcp => "gcp",
            Self::Aws => "aws",
        }
    }

    /// Parse a provider selection, where `all` expands to every provider.
    pub fn parse_selection(s: &str) -> Result<Vec<Self>, DomainError> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::ALL.to_vec());
        }
        Ok(vec![s.parse()?])
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gcp" | "gce" | "google" => Ok(Self::Gcp),
            "aws" | "route53" => Ok(Self::Aws),
            other => Err(DomainError::UnsupportedProvider {
                provider: other.to_string(),
            }),
        }
    }
}

// ── KeyStrategy ──────────────────────────────────────────────────────────────

/// How resource keys are derived from a record group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStrategy {
    /// `<record_type>_<safe_subdomain>`, e.g. `NS_AT`.
    #[default]
    TypeAndName,
    /// `<safe_subdomain>_<md5 of title, sorted data and type>`.
    ContentDigest,
}

impl KeyStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TypeAndName => "type-and-name",
            Self::ContentDigest => "content-digest",
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "type-and-name" | "type" => Ok(Self::TypeAndName),
            "content-digest" | "digest" | "md5" => Ok(Self::ContentDigest),
            other => Err(DomainError::InvalidKeyStrategy {
                strategy: other.to_string(),
            }),
        }
    }
}
