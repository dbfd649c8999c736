//! Behavioral specs for file input and output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use tempfile::TempDir;

use crate::prelude::*;

/// --input reads pattern and text from a file
#[test]
fn input_file_replaces_stdin() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "input.txt", "ab??aba\nababacaba\n");

    qmark_cmd()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout("2\n");
}

/// --output writes offsets to a file and nothing to stdout
#[test]
fn output_file_replaces_stdout() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.txt");

    qmark_cmd()
        .arg("-o")
        .arg(&output)
        .write_stdin("a?a\naaaaa\n")
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "0 1 2\n");
}

/// No matches leaves an empty output file
#[test]
fn output_file_is_created_without_matches() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.txt");

    qmark_cmd()
        .arg("-o")
        .arg(&output)
        .write_stdin("xyz\nabc\n")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

/// Invalid UTF-8 in the text is replaced, not fatal
#[test]
fn invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"a?a\na\xffaba\n").unwrap();

    qmark_cmd()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("0 2\n");
}
