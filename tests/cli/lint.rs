//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SITE: &str = r#"
[[pages]]
title = "Template:Short desc"
redirect = "Template:Short description"

[categories]
"Category:Hatnote templates" = ["Template:About", "Template:For"]
"#;

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("Amelia_Earhart.wiki");
    fs::write(
        &test_file,
        "{{Short description|American aviator}}\n{{Use mdy dates}}\n{{Infobox aviator}}\n'''Amelia Earhart''' was an aviator.\n",
    )
    .unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_violations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("Amelia_Earhart.wiki");
    fs::write(
        &test_file,
        "{{short description|American aviator}}\n{{use mdy dates}}\n{{Featured article}}\n{{Infobox aviator}}\n",
    )
    .unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains(
            "[section-order]: pre-content element out of order: featured-article after date-format",
        ))
        .stdout(predicate::str::contains("Amelia_Earhart.wiki:3:1"))
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_stdin() {
    cargo_bin_cmd!("wikilint")
        .arg("lint")
        .write_stdin("{{Infobox aviator}} {{Use mdy dates}} {{Short description|Aviator}}")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>:1:21"))
        .stdout(predicate::str::contains("Found 2 issue(s)"));
}

#[test]
fn test_lint_check_mode_clean() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&test_file, "{{Short description|Aviator}}\n{{Infobox aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_lint_check_mode_violations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&test_file, "{{Infobox aviator}}\n{{Short description|Aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_without_site_ignores_redirects() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&test_file, "{{Infobox aviator}}\n{{Short desc|Aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_site_resolves_redirects_and_hatnotes() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site.toml");
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&site, SITE).unwrap();
    fs::write(
        &test_file,
        "{{Infobox aviator}}\n{{Short desc|Aviator}}\n{{About|the aviator}}\n",
    )
    .unwrap();

    cargo_bin_cmd!("wikilint")
        .args([
            "lint",
            "--site",
            site.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("short-description after infobox"))
        .stdout(predicate::str::contains("hatnote after infobox"))
        .stdout(predicate::str::contains("Found 2 issue(s)"));
}

#[test]
fn test_lint_site_from_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let articles = temp_dir.path().join("articles");
    fs::create_dir(&articles).unwrap();
    fs::write(temp_dir.path().join("site.toml"), SITE).unwrap();
    fs::write(temp_dir.path().join(".wikilint.toml"), "site = \"site.toml\"\n").unwrap();
    let test_file = articles.join("article.wiki");
    fs::write(&test_file, "[[File:Earhart.jpg|thumb]]\n{{For|the film}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatnote after image"));
}

#[test]
fn test_lint_configured_rules() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(
        &config,
        "discover-hatnotes = false\n\n[[rules]]\nkind = \"navigation-header\"\npattern = \"campaignbox\"\n",
    )
    .unwrap();
    fs::write(&test_file, "{{Campaignbox Pacific War}}\n{{Infobox aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args([
            "lint",
            "--config",
            config.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("infobox after navigation-header"));
}

#[test]
fn test_lint_severity_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&config, "severity = \"error\"\n").unwrap();
    fs::write(&test_file, "{{Infobox aviator}}\n{{Short description|Aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args([
            "lint",
            "--config",
            config.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("error\x1b[0m[section-order]"))
        .stdout(predicate::str::contains("warning").not());
}

#[test]
fn test_lint_byte_order_mark() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&test_file, "\u{feff}{{Infobox aviator}}\n{{Short description|Aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("short-description after infobox"))
        .stdout(predicate::str::contains("article.wiki:2:1"));
}

#[test]
fn test_lint_invalid_pattern_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&config, "[[rules]]\nkind = \"infobox\"\npattern = \"(unclosed\"\n").unwrap();
    fs::write(&test_file, "{{Infobox aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args([
            "lint",
            "--config",
            config.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(unclosed"));
}

#[test]
fn test_lint_invalid_site_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site.toml");
    let test_file = temp_dir.path().join("article.wiki");
    fs::write(&site, "pages = 3\n").unwrap();
    fs::write(&test_file, "{{Infobox aviator}}\n").unwrap();

    cargo_bin_cmd!("wikilint")
        .args([
            "lint",
            "--site",
            site.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid site snapshot"));
}
