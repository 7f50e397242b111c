//! Tests that run the `traffic-scenic` binary.

use std::fs;
use tempfile::TempDir;

const FACTS: &str = "type(r1_s0_n1, driving).\nCar(c0).\nposition(c0, r1_s0_n1).\n";

/// Test that a missing input argument prints usage and fails.
#[test]
fn missing_argument_is_a_usage_error() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("traffic-scenic");
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"), "missing usage: {stderr:?}");
}

/// Test that extra positional arguments are rejected.
#[test]
fn extra_argument_is_a_usage_error() {
    let temp_dir = TempDir::new().expect("tempdir");
    let input = temp_dir.path().join("scenario.refinery");
    fs::write(&input, FACTS).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("traffic-scenic");
    cmd.arg(&input).arg("extra");
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"), "missing usage: {stderr:?}");
    assert!(!temp_dir.path().join("scenario.scenic").exists());
}

/// Test that a nonexistent input fails with status 1 and writes nothing.
#[test]
fn missing_file_fails() {
    let temp_dir = TempDir::new().expect("tempdir");
    let input = temp_dir.path().join("missing.refinery");

    let mut cmd = assert_cmd::cargo_bin_cmd!("traffic-scenic");
    cmd.arg(&input);
    let assert = cmd.assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    let expected = format!("Error: File '{}' does not exist.", input.display());
    assert!(stderr.contains(&expected), "unexpected error: {stderr:?}");
    assert!(!temp_dir.path().join("missing.scenic").exists());
}

/// Test that a conversion writes the sibling file and reports it.
#[test]
fn converts_file() {
    let temp_dir = TempDir::new().expect("tempdir");
    let input = temp_dir.path().join("scenario.refinery");
    let output = temp_dir.path().join("scenario.scenic");
    fs::write(&input, FACTS).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("traffic-scenic");
    cmd.arg(&input).env("RUST_LOG", "warn");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let expected = format!("Scenic code written to {}", output.display());
    assert!(stdout.contains(&expected), "missing confirmation: {stdout:?}");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        traffic_scenic::convert(FACTS)
    );
}
