//! Zonegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for zonegen, which
//! validates DNS zone files and turns them into Terraform resources for
//! Google Cloud DNS and AWS Route 53.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           zonegen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ValidationService, GenerateService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: ZoneSource, Render, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     zonegen-adapters (Infrastructure)   │
//! │ (YamlZoneSource, TerraformJsonRenderer) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Grammar, ZoneValidator, Generator)     │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use zonegen_core::domain::{
//!     DeploymentConfig, Provider, Record, ResourceGenerator, ZoneFile, get_zone_errors,
//! };
//!
//! let zone = ZoneFile::new(
//!     "example.com.",
//!     vec![Record::new("A", "www", "300", "192.0.2.1")],
//! );
//! assert!(get_zone_errors(&zone).is_empty());
//!
//! let deployment = DeploymentConfig::new().with(Provider::Gcp, "zone_name", "example-com");
//! let resources =
//!     ResourceGenerator::default().generate(Provider::Gcp, zone.origin(), zone.records(), &deployment);
//! assert_eq!(resources.keys().collect::<Vec<_>>(), vec!["A_www"]);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService, GeneratedPlan, ValidationReport, ValidationService,
        ports::{Filesystem, PlanRenderer, ZoneSource},
    };
    pub use crate::domain::{
        BackendSettings, DeploymentConfig, GeneratedResources, KeyStrategy, Provider, Record,
        RecordType, ResourceGenerator, ValidationPolicy, ZoneFile, ZoneValidator,
    };
    pub use crate::error::{ZonegenError, ZonegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
