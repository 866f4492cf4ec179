use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_flag_prints_the_package_version() {
    Command::cargo_bin("billsplit_cli")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_prints_usage() {
    Command::cargo_bin("billsplit_cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: billsplit_cli"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("billsplit_cli")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option"));
}
