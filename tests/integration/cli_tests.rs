//! Integration tests for the cmdgen binary.
//!
//! Each test builds a small project tree in a temporary directory and runs
//! the generator against it.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn cmdgen() -> Command {
    let mut cmd = Command::cargo_bin("cmdgen").unwrap();
    cmd.env_remove("PROJECT_DIR").env_remove("PIOENV");
    cmd
}

/// Project with one documented command in `src` and one in `lib`.
fn sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("blinky");
    write(
        &project,
        "src/main.cpp",
        r#"#include "cli/cli.hpp"

/**
 * @brief Prints status
 */
CLI_COMMAND(status)
{
    return 0;
}
"#,
    );
    write(
        &project,
        "lib/device/device.cpp",
        r#"/**
 * @brief Resets device
 */
CLI_COMMAND(reset)
{
    return 0;
}
"#,
    );
    temp_dir
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    cmdgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-dir"))
        .stdout(predicate::str::contains("--pio-env"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--on-duplicate"))
        .stdout(predicate::str::contains("--list"));
}

#[test]
fn test_version() {
    cmdgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_project_dir_fails() {
    cmdgen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project-dir"));
}

#[test]
fn test_nonexistent_project_dir_fails() {
    cmdgen()
        .args(["--project-dir", "/nonexistent/path/that/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_target_fails() {
    cmdgen()
        .args(["--project-dir", ".", "--target", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

// ============================================================================
// Generation tests
// ============================================================================

#[test]
fn test_generates_table_and_help() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");

    cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 file(s) for blinky"));

    let table = fs::read_to_string(output.join("cmdTable.cpp")).unwrap();
    assert!(table.contains("This is a generated file for project blinky."));
    assert!(
        table.contains("CLI_COMMAND(status);            /* Found in src/main.cpp at line 5 */")
    );
    assert!(table.contains("    CLI_CMD_DEF(status),\n    CLI_CMD_DEF(reset)\n};"));
    assert!(table.contains("CmdTabSiz = 2;"));

    let help = fs::read_to_string(output.join("help.cpp")).unwrap();
    assert_eq!(
        help,
        "const char *cmd_reset_help = \"reset     Resets device\";\n\
         const char *cmd_status_help = \"status    Prints status\";\n"
    );
}

#[test]
fn test_project_dir_from_environment() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");

    cmdgen()
        .env("PROJECT_DIR", &project)
        .arg("--output-dir")
        .arg(&output)
        .args(["--target", "help"])
        .assert()
        .success();

    assert!(output.join("help.cpp").exists());
    assert!(!output.join("cmdTable.cpp").exists());
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");

    let run = || {
        cmdgen()
            .arg("--project-dir")
            .arg(&project)
            .arg("--output-dir")
            .arg(&output)
            .assert()
            .success();
        (
            fs::read(output.join("cmdTable.cpp")).unwrap(),
            fs::read(output.join("help.cpp")).unwrap(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn test_libdeps_scanned_and_libcli_excluded() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");
    write(
        &project,
        ".pio/libdeps/uno/sensors/sensors.cpp",
        "CLI_COMMAND(sensors)\n{\n}\n",
    );
    write(
        &project,
        ".pio/libdeps/uno/libCli/src/builtin.cpp",
        "CLI_COMMAND(builtin)\n{\n}\n",
    );

    cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(&output)
        .env("PIOENV", "uno")
        .assert()
        .success();

    let table = fs::read_to_string(output.join("cmdTable.cpp")).unwrap();
    assert!(table.contains("CLI_CMD_DEF(sensors)"));
    assert!(!table.contains("builtin"));
}

#[test]
fn test_empty_project_emits_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("empty");
    fs::create_dir_all(project.join("src")).unwrap();
    let output = temp_dir.path().join("build");

    cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .success();

    let table = fs::read_to_string(output.join("cmdTable.cpp")).unwrap();
    assert!(table.contains("#warning No cli commands found, see libcli README"));
    assert!(table.contains("    {0, 0}\n};"));
    assert!(table.contains("CmdTabSiz = 0;"));
    assert!(fs::read_to_string(output.join("help.cpp")).unwrap().is_empty());
}

#[test]
fn test_duplicate_error_policy_fails() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    write(&project, "include/extra.cpp", "CLI_COMMAND(status)\n");

    cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(temp_dir.path().join("build"))
        .args(["--on-duplicate", "error"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("status"));
}

#[test]
fn test_explicit_roots_set_precedence() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");
    write(&project, "lib/other/status.cpp", "/** @brief From lib */\nCLI_COMMAND(status)\n");

    cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(&output)
        .args(["--root", "lib", "--root", "src", "--target", "help"])
        .assert()
        .success();

    let help = fs::read_to_string(output.join("help.cpp")).unwrap();
    assert!(help.contains("From lib"));
    assert!(!help.contains("Prints status"));
}

#[test]
fn test_list_json_writes_no_files() {
    let temp_dir = sample_project();
    let project = temp_dir.path().join("blinky");
    let output = temp_dir.path().join("build");

    let assert = cmdgen()
        .arg("--project-dir")
        .arg(&project)
        .arg("--output-dir")
        .arg(&output)
        .args(["--list", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "status");
    assert_eq!(entries[1]["name"], "reset");
    assert!(!output.exists());
}
