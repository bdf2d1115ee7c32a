use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("vitrine")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("ROUTE"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("vitrine")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_help_shows_latency_override() {
    cargo_bin_cmd!("vitrine")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("latency-ms"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("vitrine")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
