// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qmark: streaming search for patterns with single-character wildcards.
//!
//! A pattern like `ab??aba` is split into its literal segments, which are
//! compiled into one Aho-Corasick automaton. The text is consumed exactly
//! once; segment hits are chained through a window of the last `m`
//! positions, so memory depends on the pattern length only. Total time is
//! O(n + m + Z), where Z is the number of segment occurrences in the text.
//!
//! ```
//! use qmark::matcher::find_all;
//! use qmark::pattern::{Pattern, WILDCARD};
//!
//! let pattern = Pattern::parse("ab??aba", WILDCARD, 5000)?;
//! assert_eq!(find_all(&pattern, "ababacaba"), vec![2]);
//! # Ok::<(), qmark::error::Error>(())
//! ```

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matcher;
pub mod output;
pub mod pattern;
pub mod runner;
pub mod window;

#[cfg(test)]
pub mod test_utils;
