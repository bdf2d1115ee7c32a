use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_routes_lists_the_flow_in_order() {
    cargo_bin_cmd!("vitrine")
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/signup"))
        .stdout(predicate::str::contains("/profile-setup"))
        .stdout(predicate::str::contains("/store"))
        .stdout(predicate::str::contains("redirects to /signup"));
}

#[test]
fn test_routes_marks_positions() {
    cargo_bin_cmd!("vitrine")
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3"))
        .stdout(predicate::str::contains("3/3"));
}

#[test]
fn test_tui_refuses_without_a_terminal() {
    // Integration tests run without a TTY, so the default mode must bail
    // with the hint instead of hanging.
    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", tempfile::tempdir().unwrap().path())
        .arg("/store")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
