// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Segment splitting.

/// A maximal run of literal characters inside a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Literal characters of the run.
    pub text: Vec<char>,
    /// Position in appearance order.
    pub index: usize,
    /// Pattern index (0-based, inclusive) of the segment's last character.
    pub end_offset: usize,
    /// Distance from the previous segment's end to this one's; 0 for the first.
    pub delta: usize,
}

/// Split a pattern into its literal segments.
///
/// Leading, trailing and repeated wildcards produce no segment.
pub fn split_segments(pattern: &[char], wildcard: char) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut run: Vec<char> = Vec::new();

    for (pos, &c) in pattern.iter().enumerate() {
        if c == wildcard {
            if !run.is_empty() {
                push_segment(&mut segments, std::mem::take(&mut run), pos - 1);
            }
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        push_segment(&mut segments, run, pattern.len() - 1);
    }

    segments
}

fn push_segment(segments: &mut Vec<Segment>, text: Vec<char>, end_offset: usize) {
    let delta = segments
        .last()
        .map(|prev| end_offset - prev.end_offset)
        .unwrap_or(0);
    segments.push(Segment {
        text,
        index: segments.len(),
        end_offset,
        delta,
    });
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
