//! Application layer for zonegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService, GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! zone rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerateRequest, GenerateService, GeneratedPlan, ValidationReport, ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PlanRenderer, ZoneSource};

pub use error::ApplicationError;
