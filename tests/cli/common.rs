//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("mkimp")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mkimp parses an extended Markdown dialect"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mkimp")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mkimp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mkimp")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("mkimp")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "tab_width = \"wide\"").unwrap();

    cargo_bin_cmd!("mkimp")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("text")
        .assert()
        .failure();
}
