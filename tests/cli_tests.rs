use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

// Helper function to set up a test Command instance
fn set_up_command(prefs_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("wander").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("WANDER_PREFS", prefs_path);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("wander").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("photo travel diary"));
}

#[test]
#[serial]
fn test_cli_quits_on_q() {
    let dir = tempdir().unwrap();
    let mut cmd = set_up_command(&dir.path().join("name"));

    cmd.write_stdin("q\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to wander!"));
}

#[test]
#[serial]
fn test_cli_quits_on_closed_stdin() {
    let dir = tempdir().unwrap();
    let mut cmd = set_up_command(&dir.path().join("name"));

    // No input at all: the session loop must end at EOF rather than spin.
    cmd.assert().success();
}

#[test]
#[serial]
fn test_cli_name_persists_across_runs() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("name");

    let mut cmd = set_up_command(&prefs);
    cmd.arg("--name").arg("Aira").write_stdin("q\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Aira!"));

    // A later run without the flag still greets by name.
    let mut cmd = set_up_command(&prefs);
    cmd.write_stdin("q\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Aira!"));
}

#[test]
#[serial]
fn test_cli_forget_name() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("name");

    let mut cmd = set_up_command(&prefs);
    cmd.arg("--name").arg("Aira").write_stdin("q\n");
    cmd.assert().success();

    let mut cmd = set_up_command(&prefs);
    cmd.arg("--forget-name");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Display name forgotten."));

    let mut cmd = set_up_command(&prefs);
    cmd.write_stdin("q\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to wander!"));
}

#[test]
fn test_cli_name_conflicts_with_forget_name() {
    let mut cmd = Command::cargo_bin("wander").unwrap();
    cmd.arg("--name").arg("Aira").arg("--forget-name");

    cmd.assert().failure();
}

#[test]
#[serial]
fn test_cli_list_is_empty_at_session_start() {
    let dir = tempdir().unwrap();
    let mut cmd = set_up_command(&dir.path().join("name"));

    cmd.write_stdin("l\nq\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved Photos"))
        .stdout(predicate::str::contains("(none)"));
}
