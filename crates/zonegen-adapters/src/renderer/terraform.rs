//! Terraform JSON renderer.
//!
//! Produces a complete `.tf.json` document: S3 remote state, the pinned
//! Terraform and provider versions, and the generated `resource` block.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::instrument;

use zonegen_core::{
    application::{ApplicationError, ports::PlanRenderer},
    domain::{BackendSettings, GeneratedResources},
    error::ZonegenResult,
};

/// Terraform release the generated documents are written for.
pub const TERRAFORM_VERSION: &str = "= 0.11.14";

/// Region written into the provider block.
pub const DEFAULT_PROVIDER_REGION: &str = "eu-west-1";

const DOCUMENT_NAME: &str = "zone.tf.json";

/// Renders generated resources as Terraform JSON.
#[derive(Debug, Clone)]
pub struct TerraformJsonRenderer {
    provider_region: String,
}

impl TerraformJsonRenderer {
    pub fn new() -> Self {
        Self {
            provider_region: DEFAULT_PROVIDER_REGION.to_string(),
        }
    }

    #[must_use]
    pub fn with_provider_region(mut self, region: impl Into<String>) -> Self {
        self.provider_region = region.into();
        self
    }

    /// Build the document without serialising it.
    pub fn document<'a>(
        &'a self,
        resources: &'a GeneratedResources,
        backend: &'a BackendSettings,
    ) -> TerraformDocument<'a> {
        let profile = resources.profile();
        let mut backends = BTreeMap::new();
        backends.insert(
            "s3",
            S3Backend {
                encrypt: true,
                bucket: &backend.bucket,
                key: backend.state_key(profile.provider.as_str()),
                region: &backend.region,
            },
        );
        let mut provider = BTreeMap::new();
        provider.insert(
            profile.terraform_provider,
            ProviderBlock {
                region: &self.provider_region,
                version: profile.terraform_version,
            },
        );

        TerraformDocument {
            terraform: TerraformBlock {
                backend: backends,
                required_version: TERRAFORM_VERSION,
            },
            provider,
            resource: resources,
        }
    }
}

impl Default for TerraformJsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanRenderer for TerraformJsonRenderer {
    #[instrument(skip_all, fields(provider = %resources.provider()))]
    fn render(
        &self,
        resources: &GeneratedResources,
        backend: &BackendSettings,
    ) -> ZonegenResult<String> {
        let document = self.document(resources, backend);
        serde_json::to_string_pretty(&document).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn file_name(&self) -> &'static str {
        DOCUMENT_NAME
    }
}

/// A whole `.tf.json` file.
#[derive(Debug, Serialize)]
pub struct TerraformDocument<'a> {
    pub terraform: TerraformBlock<'a>,
    pub provider: BTreeMap<&'static str, ProviderBlock<'a>>,
    pub resource: &'a GeneratedResources,
}

#[derive(Debug, Serialize)]
pub struct TerraformBlock<'a> {
    pub backend: BTreeMap<&'static str, S3Backend<'a>>,
    pub required_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct S3Backend<'a> {
    pub encrypt: bool,
    pub bucket: &'a str,
    pub key: String,
    pub region: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ProviderBlock<'a> {
    pub region: &'a str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use zonegen_core::domain::{DeploymentConfig, Provider, Record, ResourceGenerator};

    fn resources(provider: Provider) -> GeneratedResources {
        let records = vec![Record::new("NS", "test", "86400", "example.com.")];
        let deployment = DeploymentConfig::new()
            .with(Provider::Gcp, "zone_name", "my-google-zone")
            .with(Provider::Aws, "zone_id", "my-aws-zone");
        ResourceGenerator::default().generate(provider, "my.dnsname.com.", &records, &deployment)
    }

    fn render(provider: Provider) -> Value {
        let backend = BackendSettings::new("test", "us-east-2").with_statefile("zone.tfstate");
        let text = TerraformJsonRenderer::new()
            .render(&resources(provider), &backend)
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn gcp_document_has_backend_provider_and_resources() {
        let doc = render(Provider::Gcp);
        assert_eq!(
            doc["terraform"],
            json!({
                "backend": {
                    "s3": {
                        "encrypt": true,
                        "bucket": "dns-state-bucket-test",
                        "key": "gcp/zone.tfstate",
                        "region": "us-east-2"
                    }
                },
                "required_version": "= 0.11.14"
            })
        );
        assert_eq!(
            doc["provider"],
            json!({ "google": { "region": "eu-west-1", "version": "1.15.0" } })
        );
        assert_eq!(
            doc["resource"]["google_dns_record_set"]["NS_test"],
            json!({
                "managed_zone": "my-google-zone",
                "name": "test.my.dnsname.com.",
                "type": "NS",
                "ttl": 86400,
                "rrdatas": ["example.com."]
            })
        );
    }

    #[test]
    fn aws_document_uses_route53_names() {
        let doc = render(Provider::Aws);
        assert_eq!(doc["terraform"]["backend"]["s3"]["key"], "aws/zone.tfstate");
        assert_eq!(doc["provider"]["aws"]["version"], "1.26.0");
        let ns = &doc["resource"]["aws_route53_record"]["NS_test"];
        assert_eq!(ns["zone_id"], "my-aws-zone");
        assert_eq!(ns["name"], "test");
        assert_eq!(ns["records"], json!(["example.com."]));
    }

    #[test]
    fn provider_region_is_configurable() {
        let renderer = TerraformJsonRenderer::new().with_provider_region("us-west-1");
        let backend = BackendSettings::new("test", "us-east-2");
        let resources = resources(Provider::Aws);
        let document = renderer.document(&resources, &backend);
        assert_eq!(document.provider["aws"].region, "us-west-1");
        assert_eq!(renderer.file_name(), "zone.tf.json");
    }

    #[test]
    fn top_level_blocks_keep_terraform_order() {
        let backend = BackendSettings::new("test", "us-east-2");
        let text = TerraformJsonRenderer::new()
            .render(&resources(Provider::Gcp), &backend)
            .unwrap();
        let terraform = text.find("\"terraform\"").unwrap();
        let provider = text.find("\"provider\"").unwrap();
        let resource = text.find("\"resource\"").unwrap();
        assert!(terraform < provider && provider < resource);
    }
}
