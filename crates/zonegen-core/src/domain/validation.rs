//! Zone-file field validation.
//!
//! The validator never fails: malformed input becomes a list of messages, and
//! every applicable rule runs so one pass reports every defect in a zone.

use tracing::{debug, instrument};

use crate::domain::{
    entities::{Record, ZoneFile},
    grammar,
    policy::ValidationPolicy,
    value_objects::RecordType,
};

/// Validates zone files against a [`ValidationPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneValidator {
    policy: ValidationPolicy,
}

impl ZoneValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// All problems with a zone file, in record order. Empty means valid.
    #[instrument(skip_all, fields(origin = zone.origin()))]
    pub fn get_zone_errors(&self, zone: &ZoneFile) -> Vec<String> {
        let mut errors = Vec::new();

        match zone.origin.as_deref() {
            None | Some("") => errors.push("Origin field must be set".to_string()),
            Some(origin) if !self.is_fqdn(origin) => {
                errors.push(format!("Origin must be a lower-case FQDN, got {origin}"))
            }
            Some(_) => {}
        }

        match zone.records.as_deref() {
            None | Some([]) => errors.push("No records found.".to_string()),
            Some(records) => {
                for record in records {
                    errors.extend(self.get_record_errors(record));
                }
            }
        }

        debug!(errors = errors.len(), "Zone validated");
        errors
    }

    /// All problems with a single record.
    pub fn get_record_errors(&self, record: &Record) -> Vec<String> {
        let mut errors = Vec::new();

        match record.ttl.as_deref() {
            None => errors.push(format!("Missing 'ttl' field in record {record}.")),
            Some(ttl) if !self.is_ttl(ttl) => errors.push(format!(
                "TTL must be an integer between {}s and {}s, got: '{}'.",
                self.policy.min_ttl, self.policy.max_ttl, ttl
            )),
            Some(_) => {}
        }

        if record.data.is_none() {
            errors.push(format!("Missing 'data' field in record {record}."));
        }

        // Type checks still run on missing data and see it as empty text.
        let data = record.data();
        match record.record_type.as_deref() {
            None => errors.push(format!("Missing 'record_type' field in record {record}.")),
            Some(raw) => match raw.parse::<RecordType>() {
                Ok(record_type) => errors.extend(record_type.data_errors(data, &self.policy)),
                Err(_) => errors.push(format!("Unknown record type: '{raw}'.")),
            },
        }

        match record.subdomain.as_deref() {
            None => errors.push(format!("Missing 'subdomain' field in record {record}.")),
            Some(sub) if record.record_type() == RecordType::Txt.as_str() => {
                if !grammar::is_txt_subdomain(sub) {
                    errors.push(format!(
                        "Invalid TXT subdomain field, must either be '@' or consist of numbers, \
                         letters, hyphens, periods and underscores; got: '{sub}'."
                    ));
                }
            }
            Some(sub) => {
                if !grammar::is_subdomain(sub, self.policy.allow_extended_subdomains) {
                    errors.push(format!(
                        "Invalid {} subdomain field, must either be '@' or consist of numbers, \
                         letters, hyphens, periods, and wildcards; got: '{}'.",
                        record.record_type.as_deref().unwrap_or("record"),
                        sub
                    ));
                }
            }
        }

        errors
    }

    /// `true` if the name is an FQDN under this validator's policy.
    pub fn is_fqdn(&self, name: &str) -> bool {
        grammar::is_fqdn(name, self.policy.allow_underscore_in_fqdn)
    }

    /// `true` if the TTL is a decimal integer inside the policy bounds.
    pub fn is_ttl(&self, ttl: &str) -> bool {
        grammar::parse_ttl(ttl).is_some_and(|t| self.policy.ttl_in_bounds(t))
    }
}

impl RecordType {
    /// Problems with `data` for a record of this type.
    pub fn data_errors(self, data: &str, policy: &ValidationPolicy) -> Vec<String> {
        let underscores = policy.allow_underscore_in_fqdn;
        let mut errors = Vec::new();

        match self {
            Self::A => {
                if !grammar::is_ipv4(data) {
                    errors.push(format!(
                        "A record data field must be an IPv4 address, got: '{data}'."
                    ));
                }
            }
            Self::Aaaa => {
                if !grammar::is_ipv6(data) {
                    errors.push(format!(
                        "AAAA record data field must be an IPv6 address, got: '{data}'."
                    ));
                }
            }
            Self::Ns | Self::Cname => {
                if !grammar::is_fqdn(data, underscores) {
                    errors.push(format!(
                        "{} record data field must be a lower-case FQDN (with a trailing dot), \
                         got: '{}'.",
                        self, data
                    ));
                }
            }
            Self::Mx => {
                if !grammar::is_mx(data, underscores) {
                    errors.push(format!(
                        "MX record data field must be of the form '<priority> <lower-case FQDN>', \
                         got: '{data}'."
                    ));
                }
            }
            Self::Txt => {
                if data.is_empty() {
                    errors.push("TXT record data field must not be empty.".to_string());
                }
                if grammar::has_unescaped_semicolons(data) {
                    errors.push(format!(
                        "TXT record data semicolons should be escaped, got: '{data}'."
                    ));
                }
                if policy.require_escaped_txt_whitespace && grammar::has_unescaped_whitespace(data)
                {
                    errors.push(format!(
                        "TXT record data whitespace should be escaped, got: '{data}'."
                    ));
                }
            }
        }

        errors
    }
}

/// [`ZoneValidator::get_zone_errors`] under the default policy.
pub fn get_zone_errors(zone: &ZoneFile) -> Vec<String> {
    ZoneValidator::default().get_zone_errors(zone)
}

/// [`ZoneValidator::get_record_errors`] under the default policy.
pub fn get_record_errors(record: &Record) -> Vec<String> {
    ZoneValidator::default().get_record_errors(record)
}
