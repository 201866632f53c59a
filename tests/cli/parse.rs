//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("wikilint")
        .arg("parse")
        .write_stdin("{{Infobox aviator|name=Amelia Earhart}}\n== Early life ==\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template"))
        .stdout(predicate::str::contains("\"Infobox aviator\""))
        .stdout(predicate::str::contains("Heading"));
}

#[test]
fn test_parse_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(
        &test_file,
        "[[File:Earhart.jpg|thumb|Earhart in 1935]]\n<!-- lead -->\nText.",
    )
    .unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link"))
        .stdout(predicate::str::contains("\"File:Earhart.jpg\""))
        .stdout(predicate::str::contains("Comment"))
        .stdout(predicate::str::contains("Text"));
}

#[test]
fn test_parse_empty_input() {
    cargo_bin_cmd!("wikilint")
        .arg("parse")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}
