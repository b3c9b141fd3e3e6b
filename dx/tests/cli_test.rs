//! CLI tests for the dx binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_plain_text_passthrough() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    std::fs::write(&path, "backpropagation in two pages").unwrap();

    Command::cargo_bin("dx")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("backpropagation in two pages"))
        .stderr(predicate::str::contains("characters"));
}

#[test]
fn test_unsupported_format_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.xyz");
    std::fs::write(&path, "irrelevant").unwrap();

    Command::cargo_bin("dx")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document format"));
}

#[test]
fn test_missing_path_argument() {
    Command::cargo_bin("dx").unwrap().assert().failure();
}
