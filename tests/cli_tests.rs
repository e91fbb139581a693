// Tests for the bare-invocation guidance and argument validation

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_subcommand_shows_guidance() {
    // Running `chores` without arguments should explain how to get started
    let mut cmd = Command::cargo_bin("chores").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chores bootstrap"))
        .stdout(predicate::str::contains("chores check"))
        .stdout(predicate::str::contains("chores check lint"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("chores").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("bootstrap"));
}

#[test]
fn test_check_help_lists_selectors() {
    let mut cmd = Command::cargo_bin("chores").unwrap();

    cmd.args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("type"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("all"));
}

#[test]
fn test_invalid_task_selector_is_rejected_before_any_work() {
    // Clap rejects unknown selectors at parse time, so no tool ever runs
    let mut cmd = Command::cargo_bin("chores").unwrap();

    cmd.args(["check", "unit"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_bootstrap_rejects_unknown_flags() {
    let mut cmd = Command::cargo_bin("chores").unwrap();

    cmd.args(["bootstrap", "--recreate"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}
