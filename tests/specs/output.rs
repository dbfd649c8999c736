//! Behavioral specs for output formats.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// JSON output is one object per line
#[test]
fn json_format_writes_ndjson() {
    qmark_cmd()
        .args(["--format", "json"])
        .write_stdin("a?a\naaaa\n")
        .assert()
        .success()
        .stdout("{\"offset\":0}\n{\"offset\":1}\n");
}

/// JSON lines parse as objects with an offset field
#[test]
fn json_lines_are_valid_json() {
    let output = qmark_cmd()
        .args(["-f", "json"])
        .write_stdin("ab??aba\nababacaba\n")
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["offset"], 2);
}

/// --count prints only the number of matches
#[test]
fn count_prints_number_of_matches() {
    qmark_cmd()
        .arg("--count")
        .write_stdin("???\nabcde\n")
        .assert()
        .success()
        .stdout("3\n");
}

/// --count prints zero when nothing matches
#[test]
fn count_prints_zero() {
    qmark_cmd()
        .arg("--count")
        .write_stdin("zz\nabcde\n")
        .assert()
        .success()
        .stdout("0\n");
}

/// --count combines with JSON
#[test]
fn count_json() {
    qmark_cmd()
        .args(["--count", "--format", "json"])
        .write_stdin("a\nabab\n")
        .assert()
        .success()
        .stdout("{\"count\":2}\n");
}

/// Logs go to stderr, never stdout
#[test]
fn verbose_logs_stay_off_stdout() {
    qmark_cmd()
        .arg("--verbose")
        .write_stdin("a?a\naaaa\n")
        .assert()
        .success()
        .stdout("0 1\n");
}
