use assert_cmd::Command;
use predicates::prelude::*;

// Only startup validation is exercised here; valid arguments put the binary
// into a full-screen interactive loop.

#[test]
fn zero_work_duration_is_rejected() {
    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--work", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--work"));
}

#[test]
fn zero_sessions_is_rejected() {
    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--sessions", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sessions"));
}

#[test]
fn zero_break_durations_are_rejected() {
    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--short-break", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--short-break"));

    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--long-break", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--long-break"));
}

#[test]
fn oversized_duration_is_rejected() {
    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--work", "100000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--work"))
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn non_integer_duration_is_rejected() {
    Command::cargo_bin("tomo")
        .unwrap()
        .args(["--work", "abc"])
        .assert()
        .failure();
}

#[test]
fn help_lists_the_options() {
    Command::cargo_bin("tomo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--work"))
        .stdout(predicate::str::contains("--short-break"))
        .stdout(predicate::str::contains("--long-break"))
        .stdout(predicate::str::contains("--sessions"));
}
