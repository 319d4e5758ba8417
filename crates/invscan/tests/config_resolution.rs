//! E2E tests for `invscan.toml` discovery and precedence.

mod common;

use common::{Sandbox, listing_json};
use predicates::prelude::*;

#[test]
fn discovered_config_sets_default_format() {
    let sandbox = Sandbox::new();
    sandbox.write("invscan.toml", "[output]\nformat = \"json\"\n");

    sandbox
        .cmd()
        .arg("--from-json")
        .arg(listing_json())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"hosts\""));
}

#[test]
fn cli_format_beats_config() {
    let sandbox = Sandbox::new();
    sandbox.write("invscan.toml", "[output]\nformat = \"json\"\n");

    sandbox
        .cmd()
        .arg("--from-json")
        .arg(listing_json())
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("ANSIBLE INVENTORY ANALYSIS REPORT"));
}

#[test]
fn user_config_dir_is_used_when_cwd_has_none() {
    let sandbox = Sandbox::new();
    let user_dir = sandbox.path().join("config").join("invscan");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    sandbox
        .cmd()
        .arg("--from-json")
        .arg(listing_json())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn broken_discovered_config_is_ignored_with_warning() {
    let sandbox = Sandbox::new();
    sandbox.write("invscan.toml", "[output\nformat =");

    sandbox
        .cmd()
        .arg("--from-json")
        .arg(listing_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("ANSIBLE INVENTORY ANALYSIS REPORT"))
        .stderr(predicate::str::contains("ignoring unreadable config"));
}

#[test]
fn explicit_config_overrides_discovered_one() {
    let sandbox = Sandbox::new();
    sandbox.write("invscan.toml", "[output]\nformat = \"text\"\n");
    let explicit = sandbox.write("ci.toml", "[output]\nformat = \"json\"\n");

    sandbox
        .cmd()
        .arg("--config")
        .arg(&explicit)
        .arg("--from-json")
        .arg(listing_json())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}
