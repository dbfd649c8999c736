// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Default input size limits.
pub mod limits {
    /// Longest accepted pattern, in characters (5000).
    pub const MAX_PATTERN_LEN: usize = 5_000;

    /// Longest accepted text, in significant characters (2,000,000).
    pub const MAX_TEXT_LEN: usize = 2_000_000;
}

/// Default wildcard character.
pub const WILDCARD: char = crate::pattern::WILDCARD;
