//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("wikilint")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wikilint checks that the elements"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("wikilint")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("wikilint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("wikilint")
        .arg("format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_lint_help() {
    cargo_bin_cmd!("wikilint")
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CANONICAL ORDER"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("wikilint")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("wikilint")
        .args(["lint", "does-not-exist.wiki"])
        .assert()
        .failure();
}

#[test]
fn test_man_pages_per_subcommand() {
    let man_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("target/man");
    for page in ["wikilint.1", "wikilint-lint.1", "wikilint-parse.1"] {
        assert!(man_dir.join(page).is_file(), "missing {page}");
    }
    assert!(!man_dir.join("wikilint-help.1").exists());
}
