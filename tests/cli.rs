#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("pantry-cli").unwrap()
}

#[test]
fn check_config_accepts_reference() {
    cli()
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 3 location(s)"));
}

#[test]
fn schedule_prints_shifts_and_flags_gaps() {
    let dir = tempdir().unwrap();
    let students = dir.path().join("students.csv");
    let out_csv = dir.path().join("shifts.csv");
    fs::write(&students, "name,weekly_hours,availability\nAnn,10,Monday=9-17\n").unwrap();

    cli()
        .arg("schedule")
        .arg("--students")
        .arg(&students)
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Main Office:"))
        .stdout(predicate::str::contains("Monday: Ann (11 - 15)"))
        .stderr(predicate::str::contains(
            "Not enough staff for G Building on Monday. Required: 1, Scheduled: 0",
        ));

    assert!(fs::read_to_string(out_csv)
        .unwrap()
        .contains("Main Office,Monday,Ann,11,15"));
}

#[test]
fn custom_config_fully_staffed_exits_cleanly() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("locations.json");
    let students = dir.path().join("students.csv");
    fs::write(
        &config,
        r#"{"priority": ["Desk"], "locations": {"Desk": {"operating_hours": {"Monday": [9, 17]}, "required_staff": 1}}}"#,
    )
    .unwrap();
    fs::write(&students, "name,weekly_hours,availability\nAnn,10,Monday=8-12\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("schedule")
        .arg("--students")
        .arg(&students)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday: Ann (9 - 12)"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("locations.json");
    fs::write(
        &config,
        r#"{"priority": ["Desk"], "locations": {"Desk": {"operating_hours": {"Monday": [17, 9]}, "required_staff": 1}}}"#,
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid operating window"));
}

#[test]
fn export_config_writes_reference() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("reference.json");

    cli()
        .arg("export-config")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(out).unwrap();
    assert!(written.contains("\"Inventory Room\""));
    assert!(written.contains("\"required_staff\": 2"));
}
