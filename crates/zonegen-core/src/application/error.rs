//! Application layer errors.
//!
//! These errors represent failures in orchestration, not zone content.
//! Zone content problems are the validator's messages, carried here only
//! when they stop a generation run.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The zone file could not be read.
    #[error("Cannot read zone file {path}: {reason}")]
    ZoneUnreadable { path: PathBuf, reason: String },

    /// The zone file is not well-formed YAML of the expected shape.
    #[error("Cannot parse zone file {path}: {reason}")]
    ZoneParse { path: PathBuf, reason: String },

    /// The zone failed the validation gate.
    #[error("Zone file {path} has {} validation error(s)", errors.len())]
    ValidationFailed { path: PathBuf, errors: Vec<String> },

    /// A provider needs a deployment setting nobody supplied.
    #[error("Provider '{provider}' requires '{key}' (set {env_var})")]
    MissingDeploymentSetting {
        provider: String,
        key: &'static str,
        env_var: &'static str,
    },

    /// Generated resources could not be rendered into a document.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ZoneUnreadable { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "Set ZONEFILE or pass the path explicitly".into(),
            ],
            Self::ZoneParse { .. } => vec![
                "Zone files are YAML with a top-level 'origin' and 'records' list".into(),
                "Quote values such as '@' and '*' that YAML treats specially".into(),
            ],
            Self::ValidationFailed { errors, .. } => {
                let mut out: Vec<String> = errors.iter().map(|e| format!("  • {e}")).collect();
                out.push("Fix the zone file and run 'zonegen validate' again".into());
                out
            }
            Self::MissingDeploymentSetting { env_var, .. } => vec![
                format!("Please set the '{}' environment variable.", env_var),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ZoneUnreadable { .. } => ErrorCategory::NotFound,
            Self::ZoneParse { .. } | Self::ValidationFailed { .. } => ErrorCategory::Validation,
            Self::MissingDeploymentSetting { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
