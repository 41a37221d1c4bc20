//! CLI integration tests: run the `json-compact` binary on files and stdin.

use std::fs;

use assert_cmd::Command;

fn json_compact() -> Command {
    Command::cargo_bin("json-compact").unwrap()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Valid input
// ============================================================================

#[test]
fn compacts_stdin() {
    let output = json_compact()
        .write_stdin("{ \"a\" : [ 1, 2.0, \"x\" ],\n  \"b\": null }\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "{\"a\":[1,2.0,\"x\"],\"b\":null}\n");
}

#[test]
fn compacts_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.json");
    fs::write(&path, "[ true , false ]").unwrap();

    let output = json_compact().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "[true,false]\n");
}

#[test]
fn check_prints_nothing() {
    let output = json_compact()
        .arg("--check")
        .write_stdin("{\"ok\": true}")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

// ============================================================================
// Invalid input
// ============================================================================

#[test]
fn invalid_json_exits_with_1() {
    let output = json_compact().write_stdin("[1, 2,]").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("<stdin>: "), "{stderr}");
    assert!(stderr.contains("line 1, column 7"), "{stderr}");
}

#[test]
fn debug_shows_last_parsed_line() {
    let output = json_compact()
        .arg("--debug")
        .write_stdin("{\n  \"a\": 1,\n  \"b\": nope\n}")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Last parsed line(3):   \"b\": "), "{stderr}");
}

#[test]
fn empty_input_is_invalid() {
    let output = json_compact().write_stdin("").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("empty input"));
}

#[test]
fn depth_flag_limits_nesting() {
    let output = json_compact()
        .args(["--max-depth", "2"])
        .write_stdin("[[[0]]]")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("nesting deeper than 2 levels"));

    let output = json_compact()
        .args(["--max-depth", "3"])
        .write_stdin("[[[0]]]")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn input_size_flag_limits_bytes() {
    let output = json_compact()
        .args(["--max-input-size", "3"])
        .write_stdin("[1, 2]")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("exceeds the limit of 3 bytes"));
}

// ============================================================================
// I/O failures
// ============================================================================

#[test]
fn missing_file_exits_with_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let output = json_compact().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("failed to read"));
}
