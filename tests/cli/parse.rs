//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("mkimp")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "heading""#))
        .stdout(predicate::str::contains(r#""type": "paragraph""#));
}

#[test]
fn test_parse_output_is_json() {
    let output = cargo_bin_cmd!("mkimp")
        .arg("parse")
        .write_stdin("See [^a].\n\n[x]: /u\n\n[^a]: Note.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["footnoteIndexRefs"]["a"], 1);
    assert_eq!(value["reflinks"]["x"]["link"], "/u");
    assert!(value["tokens"].is_array());
}

#[test]
fn test_parse_file_with_include() {
    let temp_dir = TempDir::new().unwrap();
    let main = temp_dir.path().join("main.md");
    fs::write(&main, "!INCLUDE \"part.md\"").unwrap();
    fs::write(temp_dir.path().join("part.md"), "# Part").unwrap();

    cargo_bin_cmd!("mkimp")
        .args(["parse", main.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "include""#))
        .stdout(predicate::str::contains(r#""text": "Part""#));
}

#[test]
fn test_parse_handles_malformed_input() {
    cargo_bin_cmd!("mkimp")
        .arg("parse")
        .write_stdin("**[`<a href=$|| >! ```")
        .assert()
        .success();
}
