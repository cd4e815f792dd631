//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `zonegen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ZoneSource`: Zone file loading
//!   - `PlanRenderer`: Turning generated resources into a deployable document
//!   - `Filesystem`: Writing rendered documents
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PlanRenderer, ZoneSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockPlanRenderer, MockZoneSource};
