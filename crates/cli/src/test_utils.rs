//! Shared unit test utilities.
//!
//! Provides a brute-force reference matcher and temp-file helpers for unit
//! tests in the qmark crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use tempfile::NamedTempFile;

use crate::pattern::{Pattern, WILDCARD};

/// Parse a pattern with the default wildcard and limits.
pub fn pattern(text: &str) -> Pattern {
    Pattern::parse(text, WILDCARD, 5000).unwrap()
}

/// Brute-force O(n * m) matcher used as an oracle.
///
/// An empty pattern matches at every text position.
pub fn naive_matches(pattern: &str, text: &str, wildcard: char) -> Vec<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    if pattern.is_empty() {
        return (0..text.len()).collect();
    }
    if text.len() < pattern.len() {
        return Vec::new();
    }

    (0..=text.len() - pattern.len())
        .filter(|&start| {
            pattern
                .iter()
                .zip(&text[start..])
                .all(|(&p, &t)| p == wildcard || p == t)
        })
        .collect()
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
