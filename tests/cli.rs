//! End-to-end runs of the `kicad-pinout` binary

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kicad_pinout() -> Command {
    Command::cargo_bin("kicad-pinout").unwrap()
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("test")
        .join("pinout.net")
}

/// A project folder holding a copy of the test netlist
fn project(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sdlogger.net"), contents).unwrap();
    dir
}

#[test]
fn writes_pinout_csv() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("pinouts");

    kicad_pinout()
        .arg(project.path())
        .arg(&out_dir)
        .arg("J1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated pinout for J1"));

    let csv = fs::read_to_string(out_dir.join("pinout-SD_Logger-J1.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], r#""Project:","SD Logger""#);
    assert_eq!(lines[2], r#""Symbol Value:","Micro_SD_Card""#);
    assert_eq!(lines[3], r#""Manufacturer Part Number:","DM3AT-SF-PEJM5""#);
    assert_eq!(
        &lines[lines.len() - 5..],
        &[
            r#""Pin Number","Pin Name","Net Name""#,
            r#""1","DAT2","SDC0-D2""#,
            r#""3","CMD","SD_CMD""#,
            r#""5","CLK","SD_CLK""#,
            r#""9","SHIELD","GND""#,
        ]
    );
}

#[test]
fn blank_value_and_padded_mpn_are_cleaned_up() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("U2")
        .assert()
        .success();

    let csv = fs::read_to_string(out.path().join("pinout-SD_Logger-U2.csv")).unwrap();
    assert!(csv.contains(r#""Symbol Value:","N/A""#));
    assert!(csv.contains(r#""Manufacturer Part Number:","W25Q64JVXGIQ""#));
}

#[test]
fn keep_all_includes_power_pins() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("U1")
        .arg("--keep-all")
        .assert()
        .success();

    let csv = fs::read_to_string(out.path().join("pinout-SD_Logger-U1.csv")).unwrap();
    assert!(csv.contains(r#""1","VBAT","+3V3""#));
    assert!(csv.contains(r#""11","PA1","unconnected-(U1-PA1-Pad11)""#));
}

#[test]
fn exclude_replaces_default_filter() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("J1")
        .args(["--exclude", "input", "--exclude", "passive"])
        .assert()
        .success();

    let csv = fs::read_to_string(out.path().join("pinout-SD_Logger-J1.csv")).unwrap();
    assert!(csv.contains(r#""4","VDD","+3V3""#));
    assert!(!csv.contains("SD_CMD"));
    assert!(!csv.contains("SHIELD"));
}

#[test]
fn unknown_pin_type_is_a_usage_error() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("J1")
        .args(["--exclude", "power input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pin type"));
}

#[test]
fn missing_component_fails() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("U99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("component 'U99' not found"));
}

#[test]
fn component_without_pins_fails() {
    let project = project(&fs::read_to_string(fixture()).unwrap());
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("#FLG01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pin data"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn unsupported_version_fails() {
    let netlist = fs::read_to_string(fixture())
        .unwrap()
        .replace("Eeschema 9.0.1", "Eeschema 7.0.11");
    let project = project(&netlist);
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("U1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported version '7.0.11'"));
}

#[test]
fn folder_without_netlist_fails() {
    let project = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    kicad_pinout()
        .arg(project.path())
        .arg(out.path())
        .arg("U1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}
