// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sliding window that reassembles segment hits into pattern matches.
//!
//! Slot `k` holds the segment indices confirmed to end at absolute position
//! `window_start + k + 1` (1-based, i.e. after that many characters). A
//! segment `i > 0` is confirmed only when segment `i - 1` was confirmed
//! exactly `delta[i]` slots earlier, so confirming the last segment proves
//! the whole chain. The window never holds more than `m` slots.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::pattern::Pattern;

/// Fixed-size window of per-position segment sets.
#[derive(Debug, Clone)]
pub struct WindowTracker {
    slots: VecDeque<FxHashSet<usize>>,
    deltas: Vec<usize>,
    /// Index and end offset of the last segment.
    last: Option<(usize, usize)>,
    pattern_len: usize,
    window_start: usize,
}

impl WindowTracker {
    pub fn new(pattern: &Pattern) -> Self {
        let capacity = pattern.len().max(1);
        Self {
            slots: (0..capacity).map(|_| FxHashSet::default()).collect(),
            deltas: pattern.segments().iter().map(|s| s.delta).collect(),
            last: pattern.last_segment().map(|s| (s.index, s.end_offset)),
            pattern_len: pattern.len(),
            window_start: 0,
        }
    }

    /// Record segments completed after `position` characters.
    pub fn record(&mut self, position: usize, completed: &[usize]) {
        debug_assert!(position > self.window_start);
        let slot = position - self.window_start - 1;

        for &index in completed {
            if index == 0 {
                // The first segment may start anywhere
                self.slots[slot].insert(0);
                continue;
            }

            let Some(expected) = slot.checked_sub(self.deltas[index]) else {
                continue;
            };
            if self.slots[expected].contains(&(index - 1)) {
                self.slots[slot].insert(index);
                tracing::trace!(position, segment = index, "segment chained");
            }
        }
    }

    /// Start offset of the match ending after `counter` characters, if the
    /// last segment was confirmed at its expected slot.
    pub fn check(&self, counter: usize) -> Option<usize> {
        if counter < self.pattern_len {
            return None;
        }
        let (index, end_offset) = self.last?;
        self.slots[end_offset]
            .contains(&index)
            .then(|| counter - self.pattern_len)
    }

    /// Drop the oldest slot and open an empty one at the end.
    pub fn advance(&mut self) {
        if let Some(mut oldest) = self.slots.pop_front() {
            oldest.clear();
            self.slots.push_back(oldest);
        }
        self.window_start += 1;
    }

    /// Absolute offset of slot 0.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Number of slots; fixed for the lifetime of the tracker.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Segment indices currently confirmed at `slot`.
    pub fn slot(&self, slot: usize) -> Option<&FxHashSet<usize>> {
        self.slots.get(slot)
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
