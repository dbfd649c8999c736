// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search runner: wires the character stream, the matcher and the sink.
//!
//! Offsets are written as soon as they are found. If the run stops early
//! (text limit, I/O failure) everything written up to that point is still
//! correct and in order.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::input::CharStream;
use crate::matcher::StreamMatcher;
use crate::output::OffsetWriter;
use crate::pattern::Pattern;

/// Configuration for the search runner.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Maximum number of significant text characters.
    pub max_text_len: usize,
}

/// Statistics for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Significant characters consumed.
    pub chars: usize,
    /// Matches reported.
    pub matches: usize,
    /// Literal segments in the pattern.
    pub segments: usize,
    /// Automaton states, root included.
    pub states: usize,
}

/// Runs one pattern over one input stream.
pub struct SearchRunner {
    pattern: Pattern,
    config: RunnerConfig,
}

impl SearchRunner {
    pub fn new(pattern: Pattern, config: RunnerConfig) -> Self {
        Self { pattern, config }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Stream `reader` through the matcher, writing offsets to `writer`.
    ///
    /// The writer is not finished here so the caller can flush partial
    /// output after an error.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut OffsetWriter<W>,
    ) -> Result<RunSummary> {
        let chars = CharStream::new(reader, self.config.max_text_len);
        let matcher = StreamMatcher::new(&self.pattern);
        let mut summary = RunSummary {
            segments: self.pattern.segments().len(),
            states: matcher.automaton().len(),
            ..RunSummary::default()
        };

        let mut matches = matcher.try_matches(chars);
        for offset in matches.by_ref() {
            writer.write(offset?)?;
            summary.matches += 1;
        }
        summary.chars = matches.matcher().counter();

        tracing::info!(
            chars = summary.chars,
            matches = summary.matches,
            "search finished"
        );
        Ok(summary)
    }

    /// Run to completion and finish `writer`, returning the sink.
    ///
    /// Partial output is flushed even when the run fails. A run error takes
    /// precedence over an error from the final flush.
    pub fn search<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: OffsetWriter<W>,
    ) -> Result<(RunSummary, W)> {
        let result = self.run(reader, &mut writer);
        let finished = writer.finish();
        let summary = result?;
        Ok((summary, finished?))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
