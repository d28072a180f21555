//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("pessoa").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("pessoa").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--table"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("pessoa").unwrap();
    cmd.current_dir(dir)
        .env_remove("DATABASE_URL")
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_bad_table() {
    let mut cmd = Command::cargo_bin("pessoa").unwrap();
    cmd.arg("serve").arg("--table").arg("bad name");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("table name"));
}

#[test]
fn test_serve_flags_have_env_fallbacks() {
    let mut cmd = Command::cargo_bin("pessoa").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--acquire-timeout"))
        .stdout(predicate::str::contains("PESSOA_ACQUIRE_TIMEOUT"))
        .stdout(predicate::str::contains("PESSOA_MAX_CONNECTIONS"));
}
