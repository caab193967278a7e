//! CLI integration tests for the cfgload binary.
//! Runs each command against a controlled environment and checks
//! stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ============================================================
// Helper functions
// ============================================================

const CONFIG_VARS: [&str; 6] = [
    "PROJECT_NAME",
    "INSTANCE_NAME",
    "SQL_NAME",
    "TEST_BOOL",
    "CFGLOAD_BACKEND",
    "RUST_LOG",
];

/// Build a `cfgload` command in `dir` with every variable it reads cleared.
fn cfgload_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("cfgload");
    cmd.current_dir(dir);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Parse a JSON document from captured output.
fn parse_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "Failed to parse JSON from {:?}: {}",
            String::from_utf8_lossy(bytes),
            e
        )
    })
}

// ============================================================
// check
// ============================================================

#[test]
fn test_check_json_reports_every_missing_key() {
    let dir = TempDir::new().unwrap();

    let output = cfgload_cmd(dir.path())
        .env("PROJECT_NAME", "foo")
        .env("INSTANCE_NAME", "")
        .args(["check", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .get_output()
        .stderr
        .clone();

    let body = parse_json(&output);
    assert_eq!(body["error"], "[INSTANCE_NAME SQL_NAME] required");
    assert_eq!(body["missing"], serde_json::json!(["INSTANCE_NAME", "SQL_NAME"]));
}

#[test]
fn test_check_human_success() {
    let dir = TempDir::new().unwrap();

    cfgload_cmd(dir.path())
        .env("PROJECT_NAME", "proj")
        .env("INSTANCE_NAME", "inst")
        .env("SQL_NAME", "db")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 3 required key(s) set (env source)"))
        .stdout(predicate::str::contains("SQL_NAME=db"));
}

#[test]
fn test_check_custom_keys_human_error() {
    let dir = TempDir::new().unwrap();

    cfgload_cmd(dir.path())
        .env("REGION", "eu")
        .args(["check", "REGION", "CFGLOAD_TEST_ZONE"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: [CFGLOAD_TEST_ZONE] required"));
}

// ============================================================
// flag
// ============================================================

#[test]
fn test_flag_strict_unset_fails() {
    let dir = TempDir::new().unwrap();

    cfgload_cmd(dir.path())
        .args(["flag", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TEST_BOOL not set"));
}

#[test]
fn test_flag_strict_malformed_fails() {
    let dir = TempDir::new().unwrap();

    cfgload_cmd(dir.path())
        .env("TEST_BOOL", "notabool")
        .args(["flag", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TEST_BOOL not parseable bool"));
}

#[test]
fn test_flag_permissive_malformed_is_false() {
    let dir = TempDir::new().unwrap();

    let output = cfgload_cmd(dir.path())
        .env("TEST_BOOL", "notabool")
        .args(["flag", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body = parse_json(&output);
    assert_eq!(body["key"], "TEST_BOOL");
    assert_eq!(body["value"], false);
    assert_eq!(body["setting"]["state"], "malformed");
    assert_eq!(body["setting"]["value"], "notabool");
}

#[test]
fn test_flag_accepts_numeric_true() {
    let dir = TempDir::new().unwrap();

    cfgload_cmd(dir.path())
        .env("TEST_BOOL", "1")
        .arg("flag")
        .assert()
        .success()
        .stdout(predicate::str::diff("TEST_BOOL=true\n"));
}

// ============================================================
// show
// ============================================================

#[test]
fn test_show_layered_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("app.yaml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        "project_name: from-file\ninstance_name: file-instance\nsql_name: file-db\ntest_bool: true"
    )
    .unwrap();

    let output = cfgload_cmd(dir.path())
        .env("SQL_NAME", "env-db")
        .args(["show", "--json", "--backend", "layered", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body = parse_json(&output);
    assert_eq!(body["source"], "layered");
    assert_eq!(body["project_name"], "from-file");
    assert_eq!(body["instance_name"], "file-instance");
    assert_eq!(body["sql_name"], "env-db");
    assert_eq!(body["test_bool"], true);
}

#[test]
fn test_show_layered_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.yaml");
    std::fs::write(&config_path, "project_name: [unclosed\n").unwrap();

    cfgload_cmd(dir.path())
        .args(["show", "--backend", "layered", "--config"])
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to initialize configuration source"));
}
