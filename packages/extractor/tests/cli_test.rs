//! Tests for the `docnum-extract` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("patent")
        .join(name)
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("docnum-extract").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_numbered_list() {
    cmd()
        .arg(fixture_path("sample.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 doc-number(s):"))
        .stdout(predicate::str::contains("1. 999000888\n2. 66667777\n"));
}

#[test]
fn test_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xml");
    std::fs::write(&path, "<root></root>").unwrap();

    cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 0 doc-number(s):"))
        .stdout(predicate::str::contains("1. ").not());
}

#[test]
fn test_missing_argument_prints_usage() {
    cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: docnum-extract <xml_file>"));
}

#[test]
fn test_missing_file_reports_error() {
    cmd()
        .arg("nonexistent.xml")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("nonexistent.xml"));
}

#[test]
fn test_malformed_file_reports_error() {
    cmd()
        .arg(fixture_path("malformed.xml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid XML"));
}
