// Integration tests for the worthit CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command for the worthit binary, isolated from any real config layers.
fn worthit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("worthit").expect("binary should exist");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("worthit"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("delivery offer"));
}

#[test]
fn shopping_requires_payout() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["shopping", "--out", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn pickup_requires_route() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["pickup", "--payout", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn weigh_rejects_light_with_total_qty() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["weigh", "--light", "3", "--total-qty", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn weigh_prints_weighted_quantity() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["weigh", "--light", "10", "--water", "2", "--soda", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15.30"));
}

#[test]
fn target_uses_rate_map_for_kind() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["target", "--eq-mi", "15.8", "--score", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24.65"));

    worthit(&home)
        .args(["target", "--eq-mi", "12", "--score", "60", "--kind", "pickup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("26.88"));
}

#[test]
fn defaults_prints_effective_config() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("[shopping]"))
        .stdout(predicate::str::contains("tier3_cost = 0.8"))
        .stdout(predicate::str::contains("scores = [60, 75]"));
}
