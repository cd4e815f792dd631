// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for zonegen.
//!
//! This module contains pure zone logic: the record grammar, the field
//! validator and the resource generator. Loading zone files and writing
//! Terraform documents are handled via ports defined in the application layer.
//!
//! ## Rules
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable input**: Validation and generation only borrow records
//! - **Compiled once**: Grammars live in a process-wide registry
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod policy;
pub mod providers;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    BackendSettings, DeploymentConfig, GeneratedResources, Record, RecordSet, ZoneFile,
    statefile_name,
};

pub use error::{DomainError, ErrorCategory};

pub use generator::{
    RecordGroup, ResourceGenerator, digest_key, group_records, record_digest, resource_key,
    safe_title,
};

pub use policy::ValidationPolicy;

pub use providers::{NameStyle, PROVIDER_REGISTRY, ProviderProfile, RequiredSetting, profile};

pub use validation::{ZoneValidator, get_record_errors, get_zone_errors};

pub use value_objects::{KeyStrategy, Provider, RecordType};
