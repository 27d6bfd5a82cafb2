//! Exit status of the `pesticides` binary.

use std::process::Command;

use tempfile::TempDir;

fn pesticides() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pesticides"))
}

#[test]
fn test_no_arguments_writes_default_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = pesticides()
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let content = std::fs::read_to_string(temp_dir.path().join("pesticides.csv"))
        .expect("Should write pesticides.csv");
    assert_eq!(content.lines().count(), 21);
}

#[test]
fn test_missing_directory_exits_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let target = temp_dir.path().join("missing").join("pesticides.csv");

    let output = pesticides()
        .arg("--output")
        .arg(&target)
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to export"), "stderr: {}", stderr);
    assert!(!target.exists());
}

#[test]
fn test_unknown_encoding_exits_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = pesticides()
        .current_dir(temp_dir.path())
        .args(["--encoding", "not-an-encoding"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("pesticides.csv").exists());
}
