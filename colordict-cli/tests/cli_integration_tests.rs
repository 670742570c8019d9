//! Integration tests for the cdict CLI
//!
//! Runs the binary against palette directories in temporary folders.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cdict"))
}

/// Test helper to create a palette directory with a single palette
fn setup_palettes() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let palettes = temp_dir.path().join("palettes");
    fs::create_dir_all(&palettes).unwrap();
    fs::write(
        palettes.join("warm.json"),
        "{\n    \"red\": [255, 0, 0],\n    \"orange\": [255, 165, 0]\n}\n",
    )
    .unwrap();
    temp_dir
}

/// Test helper to run the CLI against the palettes under `root`
fn run_cli_command(root: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(get_cli_path())
        .arg("--palettes-path")
        .arg(root.join("palettes"))
        .arg("--backup-path")
        .arg(root.join("backup.json"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_path()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("convert"));
    assert!(text.contains("restore"));
}

#[test]
fn test_cli_convert() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(temp_dir.path(), &["convert", "#ff0000", "--space", "hsl"]).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "HSL(0, 1, 0.5)\n");

    let output = run_cli_command(temp_dir.path(), &["convert", "zzzzzz", "--space", "rgb"]).unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_get() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(temp_dir.path(), &["get", "orange"]).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "#ffa500\n");

    let output = run_cli_command(temp_dir.path(), &["get", "orange", "--space", "rgb"]).unwrap();
    assert_eq!(stdout(&output), "sRGB(255, 165, 0)\n");

    let output = run_cli_command(temp_dir.path(), &["get", "missing"]).unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_list_palette() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(temp_dir.path(), &["list", "--palette", "warm"]).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "red\t#ff0000\norange\t#ffa500\n");
}

#[test]
fn test_cli_add_writes_palette() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(
        temp_dir.path(),
        &["add", "teal", "#008080", "--palette", "cool"],
    )
    .unwrap();
    assert!(output.status.success());

    let cool = fs::read_to_string(temp_dir.path().join("palettes").join("cool.json")).unwrap();
    assert_eq!(
        cool,
        "{\n    \"teal\": [\n        0,\n        128,\n        128,\n        255\n    ]\n}\n"
    );

    // Same name with a different value is refused.
    let output = run_cli_command(temp_dir.path(), &["add", "red", "#00ff00"]).unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn test_cli_remove() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(temp_dir.path(), &["remove", "red", "--palette", "warm"]).unwrap();
    assert!(output.status.success());

    let output = run_cli_command(temp_dir.path(), &["list", "--palette", "warm"]).unwrap();
    assert_eq!(stdout(&output), "orange\t#ffa500\n");
}

#[test]
fn test_cli_backup_and_restore() {
    let temp_dir = setup_palettes();
    let output = run_cli_command(temp_dir.path(), &["backup"]).unwrap();
    assert!(output.status.success());
    assert!(temp_dir.path().join("backup.json").exists());

    run_cli_command(temp_dir.path(), &["remove", "orange"]).unwrap();
    let output = run_cli_command(temp_dir.path(), &["get", "orange"]).unwrap();
    assert!(!output.status.success());

    let output = run_cli_command(temp_dir.path(), &["restore"]).unwrap();
    assert!(output.status.success());
    let output = run_cli_command(temp_dir.path(), &["get", "orange"]).unwrap();
    assert_eq!(stdout(&output), "#ffa500\n");
}
