//! End-to-end runs of the `zonegen` binary.

mod common;

use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use common::{INVALID_ZONE, VALID_ZONE, deployment_env, write_zone, zonegen};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_flag() {
    let temp = tempfile::tempdir().unwrap();
    zonegen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("zonegen"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = tempfile::tempdir().unwrap();
    zonegen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn providers_list_format() {
    let temp = tempfile::tempdir().unwrap();
    zonegen(temp.path())
        .args(["providers", "--format", "list"])
        .assert()
        .success()
        .stdout("gcp\naws\n");
}

#[test]
fn providers_json_format() {
    let temp = tempfile::tempdir().unwrap();
    let out = zonegen(temp.path())
        .args(["providers", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let rows: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows[0]["name"], "gcp");
    assert_eq!(rows[0]["resource_type"], "google_dns_record_set");
    assert_eq!(rows[1]["required_env"], serde_json::json!(["ROUTE53_ZONE_ID"]));
}

#[test]
fn validate_reads_zonefile_from_environment() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    zonegen(temp.path())
        .arg("validate")
        .env("ZONEFILE", "example.com.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 record(s), no errors"));
}

#[test]
fn validate_directory_reports_each_file() {
    let temp = tempfile::tempdir().unwrap();
    let zones = temp.path().join("zones");
    fs::create_dir(&zones).unwrap();
    write_zone(&zones, "a.yaml", VALID_ZONE);
    write_zone(&zones, "b.yaml", INVALID_ZONE);

    let out = zonegen(temp.path())
        .args(["--output-format", "json", "validate", "zones"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));

    let outcomes: Value = serde_json::from_slice(&out.stdout).unwrap();
    let outcomes = outcomes.as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["valid"], true);
    assert_eq!(outcomes[0]["origin"], "example.com.");
    assert_eq!(outcomes[1]["valid"], false);
}

#[test]
fn generate_writes_one_document_per_provider() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    let mut cmd = zonegen(temp.path());
    deployment_env(&mut cmd, "example.com.yaml")
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote gcp"))
        .stdout(predicate::str::contains("Wrote aws"));

    let gcp = read_json(&temp.path().join("tf-tmp/gcp/zone.tf.json"));
    assert_eq!(
        gcp["terraform"]["backend"]["s3"]["bucket"],
        "dns-state-bucket-staging"
    );
    assert_eq!(
        gcp["terraform"]["backend"]["s3"]["key"],
        "gcp/example-com.tfstate"
    );
    let www = &gcp["resource"]["google_dns_record_set"]["A_www"];
    assert_eq!(www["managed_zone"], "example-com");
    assert_eq!(www["name"], "www.example.com.");
    assert_eq!(www["ttl"], 300);

    let aws = read_json(&temp.path().join("tf-tmp/aws/zone.tf.json"));
    let ns = &aws["resource"]["aws_route53_record"]["NS_AT"];
    assert_eq!(ns["zone_id"], "Z0123456789");
    assert_eq!(
        ns["records"],
        serde_json::json!(["ns1.example.com.", "ns2.example.com."])
    );
}

#[test]
fn generate_honours_output_dir_and_region_settings() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    let mut cmd = zonegen(temp.path());
    deployment_env(&mut cmd, "example.com.yaml")
        .env("REGION", "us-east-2")
        .env("BUCKET_NAME", "shared-state")
        .args(["generate", "-p", "aws", "-o", "build"])
        .assert()
        .success();

    let aws = read_json(&temp.path().join("build/aws/zone.tf.json"));
    assert_eq!(aws["terraform"]["backend"]["s3"]["region"], "us-east-2");
    assert_eq!(aws["terraform"]["backend"]["s3"]["bucket"], "shared-state");
    assert!(!temp.path().join("build/gcp").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    let mut cmd = zonegen(temp.path());
    deployment_env(&mut cmd, "example.com.yaml")
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write"));

    assert!(!temp.path().join("tf-tmp").exists());
}

#[test]
fn stdout_prints_the_document() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    let mut cmd = zonegen(temp.path());
    let out = deployment_env(&mut cmd, "example.com.yaml")
        .args(["generate", "-p", "gcp", "--stdout"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let doc: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["provider"]["google"]["region"], "eu-west-1");
    assert!(doc["resource"]["google_dns_record_set"]["NS_AT"].is_object());
    assert!(!temp.path().join("tf-tmp").exists());
}

#[test]
fn init_then_config_get() {
    let temp = tempfile::tempdir().unwrap();

    zonegen(temp.path())
        .args(["init", "--path", "zonegen.toml"])
        .assert()
        .success();
    assert!(temp.path().join("zonegen.toml").exists());

    zonegen(temp.path())
        .args(["init", "--path", "zonegen.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    zonegen(temp.path())
        .args(["--config", "zonegen.toml", "config", "get", "deploy.region"])
        .assert()
        .success()
        .stdout("eu-west-1\n");

    zonegen(temp.path())
        .args(["--config", "zonegen.toml", "config", "get", "deploy.region"])
        .env("REGION", "ap-southeast-2")
        .assert()
        .success()
        .stdout("ap-southeast-2\n");
}

#[test]
fn completions_name_the_binary() {
    let temp = tempfile::tempdir().unwrap();
    zonegen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zonegen"));
}
