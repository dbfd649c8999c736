// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pattern loading and stream processing.

use std::path::PathBuf;

/// Errors that stop a search run.
///
/// Everything that can go wrong during matching itself (missing
/// transitions, predecessors that fell out of the window) is handled by
/// the algorithm and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pattern is {len} characters long, limit is {max}")]
    PatternTooLong { len: usize, max: usize },

    #[error("text exceeds the limit of {max} characters")]
    TextTooLong { max: usize },

    #[error("invalid wildcard {0:?}: must be a single printable character")]
    InvalidWildcard(char),

    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{key} = {value} in {} exceeds the supported maximum of {max}", path.display())]
    LimitOutOfRange {
        path: PathBuf,
        key: &'static str,
        value: usize,
        max: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
