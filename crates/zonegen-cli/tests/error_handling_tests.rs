//! Exit codes and suggestions for failing runs.

mod common;

use predicates::prelude::*;

use common::{INVALID_ZONE, VALID_ZONE, write_zone, zonegen};

#[test]
fn invalid_zone_exits_with_user_error() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "bad.yaml", INVALID_ZONE);

    zonegen(temp.path())
        .args(["validate", "bad.yaml"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Unknown record type: 'SRV'."))
        .stderr(predicate::str::contains("1 of 1 zone file(s) failed validation"));
}

#[test]
fn missing_zone_file_exits_with_not_found() {
    let temp = tempfile::tempdir().unwrap();

    zonegen(temp.path())
        .args(["validate", "nowhere.yaml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nowhere.yaml"));
}

#[test]
fn validate_without_zonefile_names_the_variable() {
    let temp = tempfile::tempdir().unwrap();

    zonegen(temp.path())
        .arg("validate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ZONEFILE"));
}

#[test]
fn generate_without_deploy_env_names_the_variable() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    zonegen(temp.path())
        .args(["generate", "-p", "aws", "-z", "example.com.yaml"])
        .env("ROUTE53_ZONE_ID", "Z0123456789")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("DEPLOY_ENV"));
}

#[test]
fn generate_without_provider_setting_names_the_variable() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    zonegen(temp.path())
        .args(["generate", "-p", "aws", "-z", "example.com.yaml"])
        .env("DEPLOY_ENV", "staging")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ROUTE53_ZONE_ID"));

    assert!(!temp.path().join("tf-tmp").exists());
}

#[test]
fn unknown_provider_lists_supported_ones() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "example.com.yaml", VALID_ZONE);

    zonegen(temp.path())
        .args(["generate", "-p", "dyn", "-z", "example.com.yaml"])
        .env("DEPLOY_ENV", "staging")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gcp"))
        .stderr(predicate::str::contains("aws"));
}

#[test]
fn invalid_zone_blocks_generation() {
    let temp = tempfile::tempdir().unwrap();
    write_zone(temp.path(), "bad.yaml", INVALID_ZONE);

    zonegen(temp.path())
        .args(["generate", "-p", "aws", "-z", "bad.yaml"])
        .env("DEPLOY_ENV", "staging")
        .env("ROUTE53_ZONE_ID", "Z0123456789")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown record type: 'SRV'."));

    assert!(!temp.path().join("tf-tmp").exists());
}

#[test]
fn unreadable_config_file_is_a_configuration_error() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("zonegen.toml"), "[validation]\nmin_ttl = 9000\nmax_ttl = 60\n")
        .unwrap();

    zonegen(temp.path())
        .args(["--config", "zonegen.toml", "providers"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn bad_arguments_exit_with_usage_error() {
    let temp = tempfile::tempdir().unwrap();

    zonegen(temp.path())
        .args(["generate", "--dry-run", "--stdout"])
        .assert()
        .code(2);
}
