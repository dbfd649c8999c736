//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the qmark binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;
use std::path::Path;

/// Returns a Command configured to run the qmark binary
pub fn qmark_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("qmark"));
    // Keep the caller's environment from leaking into specs
    cmd.env_remove("QMARK_CONFIG").env_remove("QMARK_LOG");
    cmd
}

/// Run qmark with `input` on stdin (pattern on the first line)
/// and return stdout.
pub fn search_stdin(input: &str) -> String {
    let output = qmark_cmd()
        .write_stdin(input.to_string())
        .output()
        .expect("command should run");
    assert!(
        output.status.success(),
        "qmark failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write should succeed");
    path
}
