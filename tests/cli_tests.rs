//! CLI surface tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    assert_cmd::Command::cargo_bin("fx-deploy")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox-extras"))
        .stdout(predicate::str::contains("--local"));
}

#[test]
fn test_version_flag() {
    assert_cmd::Command::cargo_bin("fx-deploy")
        .expect("binary exists")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fx-deploy"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert_cmd::Command::cargo_bin("fx-deploy")
        .expect("binary exists")
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_failure_exit_code_is_one() {
    let profiles = common::TestProfiles::empty();
    // Root exists but holds no profiles
    common::fx_deploy_cmd(&profiles.root)
        .args(["--local"])
        .assert()
        .failure()
        .code(1);
}
