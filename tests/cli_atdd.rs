use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn worthit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("worthit").expect("binary should compile");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn shopping_scenario_is_accepted() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args([
            "shopping", "--payout", "24.95", "--out", "5.8", "--customers", "2", "--light",
            "16",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("score:      61 ACCEPT"))
        .stdout(predicate::str::contains("eq-mi:      15.80"))
        .stdout(predicate::str::contains("target 60 -> need about $24.65"));
}

#[test]
fn pickup_scenario_is_skipped() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args([
            "pickup", "--payout", "20", "--route", "10", "--back", "0", "--stops", "3",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("score:      30 SKIP"));
}

#[test]
fn strict_mode_fails_on_skip() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args([
            "pickup", "--payout", "20", "--route", "10", "--back", "0", "--stops", "3",
            "--strict",
        ])
        .assert()
        .code(2);
}

#[test]
fn zero_effort_offer_is_flagged_invalid() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["shopping", "--payout", "10", "--out", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("equivalent miles came out as 0 or less"))
        .stdout(predicate::str::contains("score:").not())
        .stderr(predicate::str::contains("score is not meaningful"));
}

#[test]
fn quiet_suppresses_invalid_warning() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["-q", "shopping", "--payout", "10", "--out", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("equivalent miles came out as 0 or less"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn very_verbose_logs_each_config_layer() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(home.path().join("worthit.toml"), "[multipliers]\nwater = 2.0\n")
        .expect("config should write");
    worthit(&home)
        .args(["-vv", "weigh", "--water", "1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2.00"))
        .stderr(predicate::str::contains("merged config layer"))
        .stderr(predicate::str::contains("worthit.toml"));
}

#[test]
fn pickup_text_rows_share_a_value_column() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args([
            "pickup", "--payout", "20", "--route", "10", "--back", "0", "--stops", "3",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("route/back: 10.00 / 0.00 mi"))
        .stdout(predicate::str::contains("stops:      3"));
}

#[test]
fn json_output_carries_breakdown() {
    let home = TempDir::new().expect("temp dir should be created");
    let output = worthit(&home)
        .args([
            "shopping", "--payout", "24.95", "--out", "5.8", "--back", "5.8", "--customers",
            "2", "--light", "16", "--format", "json",
        ])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["kind"], "shopping");
    assert_eq!(value["score"], 61);
    assert_eq!(value["verdict"], "ACCEPT");
    assert_eq!(value["valid"], true);
    assert_eq!(value["breakdown"]["item_effort"], 3.2);
    assert_eq!(value["targets"][1]["score"], 75);
}

#[test]
fn working_dir_config_overrides_defaults() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("worthit.toml"),
        r#"
[thresholds]
accept = 70

[targets]
scores = [80]
"#,
    )
    .expect("config should write");

    worthit(&home)
        .args([
            "shopping", "--payout", "24.95", "--out", "5.8", "--customers", "2", "--light",
            "16",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("score:      61 MAYBE"))
        .stdout(predicate::str::contains("target 80 ->"))
        .stdout(predicate::str::contains("target 60 ->").not());
}

#[test]
fn explicit_config_layers_over_working_dir() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("worthit.toml"),
        "[multipliers]\nwater = 3.0\n",
    )
    .expect("config should write");
    let explicit = home.path().join("flat.toml");
    fs::write(&explicit, "[multipliers]\nwater = 1.0\n").expect("config should write");

    worthit(&home)
        .args(["weigh", "--water", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.00"));

    worthit(&home)
        .arg("--config")
        .arg(&explicit)
        .args(["weigh", "--water", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00"));
}

#[test]
fn missing_explicit_config_is_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args(["--config", "missing.toml", "defaults"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("worthit.toml"),
        "[pickup]\nr_bad = 3.0\nr_great = 1.0\n",
    )
    .expect("config should write");

    worthit(&home)
        .arg("defaults")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("pickup.r_great"));
}

#[test]
fn markdown_output_has_sections() {
    let home = TempDir::new().expect("temp dir should be created");
    worthit(&home)
        .args([
            "pickup", "--payout", "30", "--route", "8", "--stops", "2", "--water", "3", "-f",
            "md",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Pickup Offer"))
        .stdout(predicate::str::contains("## Breakdown"))
        .stdout(predicate::str::contains("Rate map: R_BAD=1.10 -> R_GREAT=3.00"));
}
