// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard patterns and their literal segments.
//!
//! A pattern such as `ab??aba` is split on the wildcard into maximal literal
//! runs ("segments"). Each segment remembers where it ends inside the pattern
//! so that segment hits in the text can later be checked for the exact
//! spacing the wildcards demand.

pub mod segment;

pub use segment::{Segment, split_segments};

use crate::automaton::NodeId;
use crate::error::{Error, Result};

/// Default wildcard character.
pub const WILDCARD: char = '?';

/// Longest pattern the automaton can index. A pattern of `m` characters
/// needs at most `m + 1` trie nodes, and node ids are `NodeId`.
pub const MAX_SUPPORTED_LEN: usize = NodeId::MAX as usize;

/// A parsed wildcard pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    len: usize,
    wildcard: char,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse `text` using `wildcard` as the match-anything symbol.
    ///
    /// Length is measured in characters. A pattern longer than `max_len`
    /// is rejected before any text is read. `max_len` is capped at
    /// [`MAX_SUPPORTED_LEN`].
    pub fn parse(text: &str, wildcard: char, max_len: usize) -> Result<Self> {
        let max_len = max_len.min(MAX_SUPPORTED_LEN);
        if wildcard.is_control() || wildcard.is_whitespace() {
            return Err(Error::InvalidWildcard(wildcard));
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() > max_len {
            return Err(Error::PatternTooLong {
                len: chars.len(),
                max: max_len,
            });
        }

        Ok(Self {
            len: chars.len(),
            wildcard,
            segments: split_segments(&chars, wildcard),
        })
    }

    /// Pattern length in characters (m).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Literal segments in order of appearance.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern has no literal characters at all.
    pub fn is_all_wildcards(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, whose completion closes a full match.
    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
