//! Plan renderers.

mod terraform;

pub use terraform::{DEFAULT_PROVIDER_REGION, TERRAFORM_VERSION, TerraformJsonRenderer};
