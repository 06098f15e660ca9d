//! Command-line surface tests
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn usersuggest() -> Command {
    Command::cargo_bin("usersuggest").unwrap()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_help_lists_flags() {
    usersuggest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--encode-query"));
}

#[test]
fn test_version() {
    usersuggest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_url_fails_before_ui() {
    let config = config_file("");

    usersuggest()
        .arg("--config")
        .arg(config.path())
        .args(["--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page URL"));
}

#[test]
fn test_invalid_url_from_config() {
    let config = config_file("[search]\npage_url = \"::nope\"\n");

    usersuggest()
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page URL"));
}

#[test]
fn test_missing_config_file_fails() {
    usersuggest()
        .args(["--config", "/nonexistent/usersuggest/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_malformed_config_fails() {
    let config = config_file("[search\n");

    usersuggest()
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_unknown_flag_rejected() {
    usersuggest().arg("--bogus").assert().failure();
}
