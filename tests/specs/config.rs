//! Behavioral specs for configuration and limits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use tempfile::TempDir;

use crate::prelude::*;

/// Wildcard from the config file
#[test]
fn config_sets_wildcard() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "qmark.toml", "wildcard = \"_\"\n");

    qmark_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("a_a\nabaa?a\n")
        .assert()
        .success()
        .stdout("0 3\n");
}

/// QMARK_CONFIG is used when --config is absent
#[test]
fn config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "qmark.toml", "wildcard = \"_\"\n");

    qmark_cmd()
        .env("QMARK_CONFIG", &config)
        .write_stdin("a_\nab\n")
        .assert()
        .success()
        .stdout("0\n");
}

/// --wildcard overrides the config file
#[test]
fn wildcard_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "qmark.toml", "wildcard = \"_\"\n");

    qmark_cmd()
        .arg("-C")
        .arg(&config)
        .args(["-w", "?"])
        .write_stdin("a?\nab\n")
        .assert()
        .success()
        .stdout("0\n");
}

/// Unknown keys are rejected
#[test]
fn unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "qmark.toml", "wildcards = \"_\"\n");

    qmark_cmd()
        .arg("-C")
        .arg(&config)
        .write_stdin("a\na\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("qmark.toml"));
}

/// Patterns over the limit fail before any output
#[test]
fn pattern_over_limit_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "qmark.toml",
        "[limits]\nmax_pattern_len = 3\n",
    );

    qmark_cmd()
        .arg("-C")
        .arg(&config)
        .write_stdin("abcd\nabcd\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("limit is 3"));
}

/// Text over the limit fails but keeps the offsets found so far
#[test]
fn text_over_limit_keeps_partial_output() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "qmark.toml", "[limits]\nmax_text_len = 3\n");

    qmark_cmd()
        .arg("-C")
        .arg(&config)
        .write_stdin("a\naaaaa\n")
        .assert()
        .code(1)
        .stdout("0 1 2\n")
        .stderr(predicates::str::contains("exceeds the limit"));
}

/// The default pattern limit is 5000 characters
#[test]
fn default_pattern_limit() {
    let input = format!("{}\na\n", "a".repeat(5001));
    qmark_cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicates::str::contains("5001"));
}
