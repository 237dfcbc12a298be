//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Build command for the rescalc-cli binary (finds it in target/debug when run via cargo test).
fn rescalc_cli() -> Command {
    cargo_bin_cmd!("rescalc-cli")
}

#[test]
fn test_cli_help() {
    let mut cmd = rescalc_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resistor"));
}

#[test]
fn test_cli_version() {
    let mut cmd = rescalc_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_value_single() {
    let mut cmd = rescalc_cli();

    cmd.arg("value").arg("45.0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("target resistor: 45"))
        .stdout(predicate::str::contains("45.3"))
        .stdout(predicate::str::contains("error:"));
}

#[test]
fn test_cli_value_series_topology() {
    let mut cmd = rescalc_cli();

    cmd.arg("value")
        .arg("45.0")
        .arg("--topology")
        .arg("series");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" + "));
}

#[test]
fn test_cli_value_parallel_topology() {
    let mut cmd = rescalc_cli();

    cmd.arg("value")
        .arg("33.0")
        .arg("--topology")
        .arg("parallel");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" // "));
}

#[test]
fn test_cli_value_json_output() {
    let mut cmd = rescalc_cli();

    cmd.arg("value")
        .arg("45.0")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{"))
        .stdout(predicate::str::contains("matches"));
}

#[test]
fn test_cli_value_zero_target_fails() {
    let mut cmd = rescalc_cli();

    cmd.arg("value").arg("0.0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_ratio() {
    let mut cmd = rescalc_cli();

    cmd.arg("ratio").arg("0.75");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("target ratio: 0.75"))
        .stdout(predicate::str::contains("error:"));
}

#[test]
fn test_cli_divider() {
    let mut cmd = rescalc_cli();

    cmd.arg("ratio").arg("0.5").arg("--divider");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("target ratio: 0.5"));
}

#[test]
fn test_cli_divider_above_one_fails() {
    let mut cmd = rescalc_cli();

    cmd.arg("ratio").arg("2.0").arg("--divider");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("divider ratio cannot be greater than 1"));
}

#[test]
fn test_cli_table() {
    let mut cmd = rescalc_cli();

    cmd.arg("table").arg("--series").arg("24");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E24"))
        .stdout(predicate::str::contains("47"))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn test_cli_unknown_series_falls_back() {
    let mut cmd = rescalc_cli();

    cmd.arg("table").arg("--series").arg("50");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E96"));
}

#[test]
fn test_cli_count_flag() {
    let mut cmd = rescalc_cli();

    cmd.arg("value").arg("45.0").arg("--count").arg("10");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let lines = String::from_utf8_lossy(&output.stdout).lines().count();
    // Header plus at least ten matches.
    assert!(lines >= 11);
}

#[test]
fn test_cli_exit_codes() {
    let mut cmd = rescalc_cli();
    cmd.arg("value").arg("45.0");
    cmd.assert().code(0);

    let mut cmd = rescalc_cli();
    cmd.arg("ratio").arg("2.0").arg("--divider");
    cmd.assert().code(1);
}

#[test]
fn test_cli_output_formats_are_different() {
    let mut cmd_human = rescalc_cli();
    cmd_human
        .arg("value")
        .arg("45.0")
        .arg("--format")
        .arg("human");
    let human_output = cmd_human.output().unwrap();

    let mut cmd_json = rescalc_cli();
    cmd_json
        .arg("value")
        .arg("45.0")
        .arg("--format")
        .arg("json");
    let json_output = cmd_json.output().unwrap();

    assert_ne!(
        human_output.stdout,
        json_output.stdout,
        "Different formats should produce different output"
    );
}
