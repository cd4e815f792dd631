// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Field-level zone problems are never errors of this type: the validator
/// reports those as plain messages. These variants cover values that cannot
/// be turned into domain types at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Unknown-enum Errors
    // ========================================================================
    #[error("Unknown record type: '{record_type}'")]
    UnknownRecordType { record_type: String },

    #[error("Unsupported provider '{provider}'")]
    UnsupportedProvider { provider: String },

    #[error("Unknown resource key strategy '{strategy}'")]
    InvalidKeyStrategy { strategy: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Invalid validation policy: {reason}")]
    InvalidPolicy { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownRecordType { record_type } => vec![
                format!("'{}' is not a supported record type", record_type),
                "Supported types: A, AAAA, NS, MX, TXT, CNAME".into(),
            ],
            Self::UnsupportedProvider { provider } => vec![
                format!("'{}' is not a supported provider", provider),
                "Supported providers:".into(),
                "  • gcp  - Google Cloud DNS (alias: gce)".into(),
                "  • aws  - AWS Route 53 (alias: route53)".into(),
                "Use 'all' to target every provider".into(),
            ],
            Self::InvalidKeyStrategy { .. } => vec![
                "Valid strategies: type-and-name, content-digest".into(),
            ],
            Self::InvalidPolicy { reason } => vec![
                format!("Details: {}", reason),
                "Check the [validation] section of your configuration".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownRecordType { .. } | Self::UnsupportedProvider { .. } => {
                ErrorCategory::UnknownValue
            }
            Self::InvalidKeyStrategy { .. } | Self::InvalidPolicy { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnknownValue,
}
