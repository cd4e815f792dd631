//! Validation policy.
//!
//! Rules that changed between revisions of the zone-file format are toggles
//! here instead of being hard-coded in the validator.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Lowest TTL a record may carry, in seconds.
pub const DEFAULT_MIN_TTL: u32 = 300;

/// Highest TTL a record may carry, in seconds (one day).
pub const DEFAULT_MAX_TTL: u32 = 86_400;

/// Knobs for [`ZoneValidator`](crate::domain::ZoneValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Accept `_` inside FQDN labels (`_dmarc.example.com.`).
    pub allow_underscore_in_fqdn: bool,
    /// Accept `_` and a leading `*` label in non-TXT subdomains.
    pub allow_extended_subdomains: bool,
    /// Require every whitespace character in TXT data to be backslash-escaped.
    pub require_escaped_txt_whitespace: bool,
    pub min_ttl: u32,
    pub max_ttl: u32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_underscore_in_fqdn: true,
            allow_extended_subdomains: true,
            require_escaped_txt_whitespace: false,
            min_ttl: DEFAULT_MIN_TTL,
            max_ttl: DEFAULT_MAX_TTL,
        }
    }
}

impl ValidationPolicy {
    /// The rules of the first zone-file revision: no underscores in names, no
    /// wildcard or underscored subdomains, and escaped whitespace in TXT data.
    pub fn legacy() -> Self {
        Self {
            allow_underscore_in_fqdn: false,
            allow_extended_subdomains: false,
            require_escaped_txt_whitespace: true,
            ..Self::default()
        }
    }

    pub fn with_ttl_bounds(mut self, min_ttl: u32, max_ttl: u32) -> Self {
        self.min_ttl = min_ttl;
        self.max_ttl = max_ttl;
        self
    }

    pub fn check(&self) -> Result<(), DomainError> {
        if self.min_ttl > self.max_ttl {
            return Err(DomainError::InvalidPolicy {
                reason: format!(
                    "min_ttl ({}) is greater than max_ttl ({})",
                    self.min_ttl, self.max_ttl
                ),
            });
        }
        Ok(())
    }

    pub fn ttl_in_bounds(&self, ttl: u64) -> bool {
        u64::from(self.min_ttl) <= ttl && ttl <= u64::from(self.max_ttl)
    }
}
