//! Shared fixtures for CLI tests.

#![allow(dead_code)]

use std::{fs, path::Path};

use assert_cmd::{Command, cargo};

pub const VALID_ZONE: &str = r#"origin: example.com.
records:
  - record_type: NS
    subdomain: "@"
    ttl: 86400
    data: ns1.example.com.
  - record_type: NS
    subdomain: "@"
    ttl: 86400
    data: ns2.example.com.
  - record_type: A
    subdomain: www
    ttl: 300
    data: 192.0.2.10
  - record_type: TXT
    subdomain: "@"
    ttl: 3600
    data: v=spf1 -all
"#;

pub const INVALID_ZONE: &str = r#"origin: example.com.
records:
  - record_type: SRV
    subdomain: _sip._tcp
    ttl: 300
    data: 10 60 5060 sip.example.com.
"#;

/// The binary, run in `dir` with an empty environment so no host
/// configuration or deployment variable leaks in.
pub fn zonegen(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("zonegen");
    cmd.current_dir(dir).env_clear();
    cmd
}

pub fn write_zone(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Every variable a run for both providers needs.
pub fn deployment_env<'a>(cmd: &'a mut Command, zonefile: &str) -> &'a mut Command {
    cmd.env("ZONEFILE", zonefile)
        .env("DEPLOY_ENV", "staging")
        .env("PROVIDERS", "all")
        .env("GOOGLE_ZONE_NAME", "example-com")
        .env("GOOGLE_DNS_NAME", "example.com.")
        .env("ROUTE53_ZONE_ID", "Z0123456789")
}
