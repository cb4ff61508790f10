use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FULL_RUN: &str = "Jane Doe\njane@co.com\nAcme\n1\n2\n2\n1\n\n";

fn onboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("onboard").unwrap();
    cmd.env("ONBOARDFLOW_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"submit_delay_ms": 0, "handoff_delay_ms": 0, "stats_delay_ms": 0}"#,
    )
    .unwrap();
    dir
}

#[test]
fn fresh_directory_has_not_started() {
    let dir = data_dir();

    onboard(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding: not started"));

    onboard(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No onboarding data saved."));

    onboard(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("not complete yet"));
}

#[test]
fn full_run_then_restart() {
    let dir = data_dir();

    onboard(dir.path())
        .arg("start")
        .write_stdin(FULL_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Success] Welcome aboard!"))
        .stdout(predicate::str::contains("Welcome back, Jane!"))
        .stdout(predicate::str::contains("Team Members         32  +12%"));

    onboard(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding: complete"));

    onboard(dir.path())
        .args(["show", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("companyName: Acme"))
        .stdout(predicate::str::contains("theme: dark"));

    onboard(dir.path())
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding is already complete."));

    onboard(dir.path())
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Info] Starting fresh onboarding process...",
        ));

    onboard(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No onboarding data saved."));

    onboard(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding: not started"));
}

#[test]
fn save_and_exit_resumes_at_saved_step() {
    let dir = data_dir();

    onboard(dir.path())
        .arg("start")
        .write_stdin("Jane Doe\njane@co.com\nAcme\n:save\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress saved!"));

    onboard(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("step 2 of 3 (Business Info)"));

    onboard(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""companyName": "Acme""#));
}

#[test]
fn theme_slot() {
    let dir = data_dir();

    onboard(dir.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    onboard(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));

    onboard(dir.path())
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    onboard(dir.path())
        .args(["theme", "dark", "--toggle"])
        .assert()
        .failure();

    onboard(dir.path())
        .args(["theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme"));
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = data_dir();
    std::fs::write(dir.path().join("storage.json"), "{ definitely not json").unwrap();

    onboard(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No onboarding data saved."));
}
