//! Infrastructure adapters for zonegen.
//!
//! This crate implements the ports defined in `zonegen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod zone_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{DEFAULT_PROVIDER_REGION, TerraformJsonRenderer};
pub use zone_source::{YamlZoneSource, discover_zone_files, is_zone_file};
