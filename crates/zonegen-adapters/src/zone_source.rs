//! YAML zone-file loading.
//!
//! # File format
//!
//! ```yaml
//! origin: example.com.
//! records:
//!   - record_type: NS
//!     subdomain: "@"
//!     ttl: 86400
//!     data: ns1.example.com.
//! ```
//!
//! Scalars are kept as text (`ttl: 86400` and `ttl: "86400"` load the same),
//! and missing keys load as absent so the validator can report them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use zonegen_core::{
    application::{ApplicationError, ports::ZoneSource},
    domain::ZoneFile,
    error::ZonegenResult,
};

/// Loads zone files written in YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlZoneSource;

impl YamlZoneSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse zone YAML already in memory. `path` is only used in errors.
    pub fn parse(&self, path: &Path, raw: &str) -> ZonegenResult<ZoneFile> {
        if raw.trim().is_empty() {
            return Ok(ZoneFile::default());
        }
        serde_yaml::from_str(raw).map_err(|e| {
            ApplicationError::ZoneParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ZoneSource for YamlZoneSource {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ZonegenResult<ZoneFile> {
        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::ZoneUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let zone = self.parse(path, &raw)?;
        debug!(
            origin = zone.origin(),
            records = zone.records().len(),
            "loaded zone file"
        );
        Ok(zone)
    }
}

/// `true` for `*.yaml` and `*.yml` paths.
pub fn is_zone_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Every zone file under `root`, sorted by path.
///
/// Unreadable entries below `root` emit a `WARN` log and are skipped.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn discover_zone_files(root: &Path) -> ZonegenResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ApplicationError::ZoneUnreadable {
            path: root.to_path_buf(),
            reason: "not a directory".into(),
        }
        .into());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_zone_file(entry.path()) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    debug!(count = found.len(), "discovered zone files");
    Ok(found)
}
