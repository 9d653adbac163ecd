//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("mkimp")
        .arg("render")
        .write_stdin("Some *text*.")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<p class="md-paragraph">Some <em class="md-italic">text</em>.</p>"#,
        ));
}

#[test]
fn test_render_sections_and_article() {
    cargo_bin_cmd!("mkimp")
        .args(["render", "--sections", "--article"])
        .write_stdin("# A\n\ntext")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<article class="md-article""#))
        .stdout(predicate::str::contains(r#"aria-labelledby="a""#));
}

#[test]
fn test_render_uses_config_file_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    fs::write(&input, "{{site}}").unwrap();
    fs::write(
        temp_dir.path().join(".mkimp.toml"),
        "[metadata]\nsite = \"Handbook\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("mkimp")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Handbook"));
}

#[test]
fn test_render_include_code_range() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    fs::write(&input, "!INCLUDECODE \"lib.rs\" (rust), 2:3").unwrap();
    fs::write(temp_dir.path().join("lib.rs"), "one\ntwo\nthree\nfour\n").unwrap();

    cargo_bin_cmd!("mkimp")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<td class="md-number-ln">2</td>"#))
        .stdout(predicate::str::contains("three"))
        .stdout(predicate::str::contains("four").not());
}

#[test]
fn test_tab_width_flag() {
    cargo_bin_cmd!("mkimp")
        .args(["render", "--tab-width", "2"])
        .write_stdin("- a\n  - b")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<li class="md-listitem">a<ul class="md-ullist">"#,
        ));
}
