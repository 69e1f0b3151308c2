//! Integration tests for the force-republish all command

mod common;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::prelude::*;

fn scriptpack_cmd(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("scriptpack").expect("Failed to find scriptpack binary");
    cmd.current_dir(&ws.path)
        .env_remove("SCRIPTPACK_SCRIPTS_DIR")
        .env_remove("SCRIPTPACK_OUTPUT_DIR");
    cmd
}

#[test]
fn test_all_republishes_every_script() {
    let ws = TestWorkspace::new();
    ws.create_script("clock", "1.0.0");
    ws.create_script("weather", "2.0.0");

    scriptpack_cmd(&ws)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated: 2, unchanged: 0, skipped: 0"));

    assert!(ws.file_exists("dist/clock.scripting"));
    assert!(ws.file_exists("dist/weather.scripting"));

    let manifest = ws.read_manifest("dist/hashes.json");
    assert_eq!(manifest["scripts"].as_array().unwrap().len(), 2);
}

#[test]
fn test_all_ignores_history_and_mints_fresh_identifiers() {
    let ws = TestWorkspace::new();
    ws.create_script("clock", "1.0.0");

    scriptpack_cmd(&ws).arg("all").assert().success();
    let first = ws.read_manifest("dist/hashes.json");

    // Fresh checkout with the same content; a forced run publishes again
    ws.create_script("clock", "1.0.0");
    scriptpack_cmd(&ws)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated: 1, unchanged: 0, skipped: 0"));

    let second = ws.read_manifest("dist/hashes.json");
    assert_eq!(second["scripts"][0]["version"], first["scripts"][0]["version"]);
    assert_ne!(second["scripts"][0]["uuid"], first["scripts"][0]["uuid"]);
}

#[test]
fn test_all_still_skips_nonzero_patch() {
    let ws = TestWorkspace::new();
    ws.create_script("clock", "1.0.0");
    ws.create_script("stale", "1.0.5");

    scriptpack_cmd(&ws)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated: 1, unchanged: 0, skipped: 1"));

    assert!(!ws.file_exists("dist/stale.scripting"));
}
