// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming matcher: one character in, at most one match offset out.
//!
//! Each character advances the segment automaton (algorithm 1 of Aho &
//! Corasick). Segment completions go to the [`WindowTracker`], which decides
//! whether a full pattern match ends at the current position.
//!
//! Transitions resolved through failure links are cached per departed
//! state and character, so each (state, character) pair walks the failure
//! chain at most once per run.

use rustc_hash::FxHashMap;

use crate::automaton::{Automaton, NodeId, ROOT};
use crate::pattern::Pattern;
use crate::window::WindowTracker;

/// Single-pass matcher for one pattern.
#[derive(Debug, Clone)]
pub struct StreamMatcher {
    automaton: Automaton,
    /// Lazily filled `char -> state` shortcuts, one table per state.
    memo: Vec<FxHashMap<char, NodeId>>,
    /// Scratch buffer for states visited on a failure walk.
    path: Vec<NodeId>,
    window: WindowTracker,
    state: NodeId,
    counter: usize,
    pattern_len: usize,
    all_wildcards: bool,
}

impl StreamMatcher {
    pub fn new(pattern: &Pattern) -> Self {
        let automaton = Automaton::build(pattern);
        let memo = vec![FxHashMap::default(); automaton.len()];
        Self {
            automaton,
            memo,
            path: Vec::new(),
            window: WindowTracker::new(pattern),
            state: ROOT,
            counter: 0,
            pattern_len: pattern.len(),
            all_wildcards: pattern.is_all_wildcards(),
        }
    }

    /// Consume one character. Returns the start offset of the match that
    /// ends with it, if any.
    pub fn process(&mut self, c: char) -> Option<usize> {
        self.counter += 1;

        if self.all_wildcards {
            // Empty pattern: one match per consumed character
            if self.pattern_len == 0 {
                return Some(self.counter - 1);
            }
            return (self.counter >= self.pattern_len).then(|| self.counter - self.pattern_len);
        }

        self.state = self.next_state(self.state, c);
        if let Some(completed) = self.automaton.output(self.state) {
            self.window.record(self.counter, completed);
        }

        if self.counter < self.pattern_len {
            return None;
        }
        let found = self.window.check(self.counter);
        self.window.advance();

        if let Some(offset) = found {
            tracing::trace!(offset, "pattern match");
        }
        found
    }

    fn next_state(&mut self, state: NodeId, c: char) -> NodeId {
        if let Some(&cached) = self.memo[state as usize].get(&c) {
            return cached;
        }

        self.path.clear();
        let mut current = state;
        let next = loop {
            if let Some(next) = self.automaton.goto(current, c) {
                break next;
            }
            if let Some(&cached) = self.memo[current as usize].get(&c) {
                break cached;
            }
            self.path.push(current);
            current = self.automaton.failure(current);
        };

        for &visited in &self.path {
            self.memo[visited as usize].insert(c, next);
        }
        next
    }

    /// Adapt a character iterator into an iterator of match offsets.
    pub fn matches<I>(self, chars: I) -> Matches<I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        Matches {
            matcher: self,
            chars: chars.into_iter(),
        }
    }

    /// Like [`StreamMatcher::matches`] for fallible character sources. The
    /// first error is yielded and ends the sequence.
    pub fn try_matches<I, E>(self, chars: I) -> TryMatches<I::IntoIter>
    where
        I: IntoIterator<Item = Result<char, E>>,
    {
        TryMatches {
            matcher: self,
            chars: chars.into_iter(),
            failed: false,
        }
    }

    /// Characters consumed so far.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Current automaton state.
    pub fn state(&self) -> NodeId {
        self.state
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Number of cached failure-resolved transitions.
    pub fn memo_len(&self) -> usize {
        self.memo.iter().map(FxHashMap::len).sum()
    }
}

/// Iterator over match offsets for an infallible character source.
pub struct Matches<I> {
    matcher: StreamMatcher,
    chars: I,
}

impl<I> Matches<I> {
    pub fn matcher(&self) -> &StreamMatcher {
        &self.matcher
    }
}

impl<I: Iterator<Item = char>> Iterator for Matches<I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for c in self.chars.by_ref() {
            if let Some(offset) = self.matcher.process(c) {
                return Some(offset);
            }
        }
        None
    }
}

/// Iterator over match offsets for a fallible character source.
pub struct TryMatches<I> {
    matcher: StreamMatcher,
    chars: I,
    failed: bool,
}

impl<I> TryMatches<I> {
    pub fn matcher(&self) -> &StreamMatcher {
        &self.matcher
    }
}

impl<I, E> Iterator for TryMatches<I>
where
    I: Iterator<Item = Result<char, E>>,
{
    type Item = Result<usize, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for item in self.chars.by_ref() {
            match item {
                Ok(c) => {
                    if let Some(offset) = self.matcher.process(c) {
                        return Some(Ok(offset));
                    }
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Every match start of `pattern` in `text`, in increasing order.
pub fn find_all(pattern: &Pattern, text: &str) -> Vec<usize> {
    StreamMatcher::new(pattern).matches(text.chars()).collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
