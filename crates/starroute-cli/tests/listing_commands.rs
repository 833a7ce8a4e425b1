use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("starroute");
    cmd.env_remove("STARROUTE_CONFIG")
        .env_remove("LOG_FORMAT")
        .env("RUST_LOG", "error")
        .arg("--systems")
        .arg(fixture("systems.json"))
        .arg("--anchors")
        .arg(fixture("anchors.json"));
    cmd
}

#[test]
fn range_lists_neighbours_nearest_first() {
    let mut cmd = prepare_command();
    cmd.args(["range", "--system", "Wolf 359", "--range", "8"]);

    cmd.assert().success().stdout(predicate::eq(
        "Systems within 8.0 ly of Wolf 359 (2):\n  \
         Luyten's Star (8.00 ly)\n  \
         Ross 128 (8.00 ly)\n",
    ));
}

#[test]
fn range_json_output_parses() {
    let mut cmd = prepare_command();
    cmd.args(["range", "--system", "Ratraii", "--range", "12", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let names: Vec<&str> = rows
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|row| row["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Wolf 359", "Ross 128"]);
}

#[test]
fn range_rejects_unpositioned_center() {
    let mut cmd = prepare_command();
    cmd.args(["range", "--system", "Unsurveyed"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("has no coordinates"));
}

#[test]
fn anchors_lists_resolved_entries_only() {
    let mut cmd = prepare_command();
    cmd.arg("anchors");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Ratraii (radius 50.0 ly) - Colonia bridge relay",
        ))
        .stdout(predicate::str::contains("Ghost Anchor").not());
}

#[test]
fn anchors_json_output_parses() {
    let mut cmd = prepare_command();
    cmd.args(["anchors", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let anchors: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(anchors[0]["name"], "Ratraii");
    assert_eq!(anchors.as_array().map(Vec::len), Some(1));
}

#[test]
fn json_logs_go_to_stderr() {
    let mut cmd = prepare_command();
    cmd.env("RUST_LOG", "info")
        .args(["--log-format", "json", "anchors"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Anchors (1):"))
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
