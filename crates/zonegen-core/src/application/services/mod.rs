//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate a zone" or "generate provider documents".

pub mod generate_service;
pub mod validation_service;

pub use generate_service::{GenerateRequest, GenerateService, GeneratedPlan};
pub use validation_service::{ValidationReport, ValidationService};
