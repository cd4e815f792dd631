//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `zonegen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{BackendSettings, GeneratedResources, ZoneFile};
use crate::error::ZonegenResult;

/// Port for loading zone files.
///
/// Implemented by:
/// - `zonegen_adapters::YamlZoneSource` (YAML on disk)
///
/// A zone with a missing `origin` or `records` key loads successfully; the
/// validator reports it.
#[cfg_attr(test, mockall::automock)]
pub trait ZoneSource: Send + Sync {
    /// Load and parse the zone file at `path`.
    fn load(&self, path: &Path) -> ZonegenResult<ZoneFile>;
}

/// Port for rendering generated resources into a document.
///
/// Implemented by:
/// - `zonegen_adapters::TerraformJsonRenderer` (`.tf.json` with backend and provider blocks)
#[cfg_attr(test, mockall::automock)]
pub trait PlanRenderer: Send + Sync {
    /// Render one provider's resources.
    fn render(
        &self,
        resources: &GeneratedResources,
        backend: &BackendSettings,
    ) -> ZonegenResult<String>;

    /// File name the rendered document is written under.
    fn file_name(&self) -> &'static str;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `zonegen_adapters::filesystem::LocalFilesystem` (production)
/// - `zonegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ZonegenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ZonegenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
