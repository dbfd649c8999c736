// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! A config file is optional. Every field has a default, so an empty file
//! and no file at all behave the same:
//!
//! ```toml
//! wildcard = "?"
//!
//! [limits]
//! max_pattern_len = 5000
//! max_text_len = 2000000
//! ```

pub mod defaults;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::MAX_SUPPORTED_LEN;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Character that matches any single text character.
    pub wildcard: char,

    /// Input size limits.
    pub limits: LimitsConfig,
}

impl Config {
    fn validate(&self, path: &Path) -> Result<()> {
        if self.limits.max_pattern_len > MAX_SUPPORTED_LEN {
            return Err(Error::LimitOutOfRange {
                path: path.to_path_buf(),
                key: "limits.max_pattern_len",
                value: self.limits.max_pattern_len,
                max: MAX_SUPPORTED_LEN,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wildcard: defaults::WILDCARD,
            limits: LimitsConfig::default(),
        }
    }
}

/// Limits checked before and during a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum pattern length in characters.
    pub max_pattern_len: usize,

    /// Maximum text length in significant characters.
    pub max_text_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pattern_len: defaults::limits::MAX_PATTERN_LEN,
            max_text_len: defaults::limits::MAX_TEXT_LEN,
        }
    }
}

/// Parse config file content. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate(path)?;
    Ok(config)
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path` if given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
