pub mod backend;
pub mod deployment;
pub mod resource;
pub mod zone;

pub use backend::{BackendSettings, DEFAULT_STATEFILE, default_bucket, statefile_name};
pub use deployment::DeploymentConfig;
pub use resource::{GeneratedResources, RecordSet};
pub use zone::{Record, ZoneFile};
