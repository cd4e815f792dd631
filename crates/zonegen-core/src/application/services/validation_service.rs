//! Validation Service - checks zone files without generating anything.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::ports::ZoneSource,
    domain::{ValidationPolicy, ZoneValidator},
    error::ZonegenResult,
};

/// Outcome of validating one zone file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub origin: String,
    pub record_count: usize,
    /// Every problem found, in record order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Loads zone files and runs the field validator over them.
pub struct ValidationService {
    source: Box<dyn ZoneSource>,
    validator: ZoneValidator,
}

impl ValidationService {
    pub fn new(source: Box<dyn ZoneSource>) -> Self {
        Self::with_policy(source, ValidationPolicy::default())
    }

    pub fn with_policy(source: Box<dyn ZoneSource>, policy: ValidationPolicy) -> Self {
        Self {
            source,
            validator: ZoneValidator::new(policy),
        }
    }

    /// Validate the zone file at `path`.
    ///
    /// Only unreadable or malformed files are errors; an invalid zone is a
    /// report with a non-empty error list.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn validate(&self, path: &Path) -> ZonegenResult<ValidationReport> {
        let zone = self.source.load(path)?;
        let errors = self.validator.get_zone_errors(&zone);

        info!(
            records = zone.records().len(),
            errors = errors.len(),
            "Zone validated"
        );

        Ok(ValidationReport {
            path: path.to_path_buf(),
            origin: zone.origin().to_string(),
            record_count: zone.records().len(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockZoneSource};
    use crate::domain::{Record, ZoneFile};
    use crate::error::ZonegenError;

    fn source_returning(zone: ZoneFile) -> Box<MockZoneSource> {
        let mut source = MockZoneSource::new();
        source
            .expect_load()
            .withf(|path| path == Path::new("zone.yaml"))
            .times(1)
            .return_once(move |_| Ok(zone));
        Box::new(source)
    }

    #[test]
    fn clean_zone_produces_an_empty_report() {
        let zone = ZoneFile::new(
            "example.com.",
            vec![Record::new("A", "www", "300", "192.0.2.1")],
        );
        let service = ValidationService::new(source_returning(zone));

        let report = service.validate(Path::new("zone.yaml")).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.origin, "example.com.");
        assert_eq!(report.record_count, 1);
    }

    #[test]
    fn invalid_zone_is_reported_not_raised() {
        let zone = ZoneFile::new(
            "example.com",
            vec![Record::new("A", "www", "300", "not-an-ip")],
        );
        let service = ValidationService::new(source_returning(zone));

        let report = service.validate(Path::new("zone.yaml")).unwrap();
        assert_eq!(report.errors.len(), 2);
        assert!(!report.is_valid());
    }

    #[test]
    fn policy_is_applied() {
        let zone = ZoneFile::new(
            "example.com.",
            vec![Record::new("TXT", "@", "300", "hello world")],
        );
        let strict = ValidationPolicy {
            require_escaped_txt_whitespace: true,
            ..ValidationPolicy::default()
        };
        let service = ValidationService::with_policy(source_returning(zone), strict);

        let report = service.validate(Path::new("zone.yaml")).unwrap();
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn load_failures_propagate() {
        let mut source = MockZoneSource::new();
        source.expect_load().returning(|path| {
            Err(ApplicationError::ZoneUnreadable {
                path: path.to_path_buf(),
                reason: "missing".into(),
            }
            .into())
        });
        let service = ValidationService::new(Box::new(source));

        let err = service.validate(Path::new("nope.yaml")).unwrap_err();
        assert!(matches!(
            err,
            ZonegenError::Application(ApplicationError::ZoneUnreadable { .. })
        ));
    }
}
