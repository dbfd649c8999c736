// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sink for match offsets.
//!
//! Text output is the offsets separated by single spaces, written as they
//! are found. JSON output is one object per line so it can be consumed
//! while the search is still running.

use std::io::{self, Write};

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct OffsetRecord {
    offset: usize,
}

#[derive(Serialize)]
struct CountRecord {
    count: usize,
}

/// Writes offsets incrementally to any sink.
pub struct OffsetWriter<W: Write> {
    out: W,
    format: OutputFormat,
    count_only: bool,
    written: usize,
}

impl<W: Write> OffsetWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            count_only: false,
            written: 0,
        }
    }

    /// Suppress individual offsets; [`OffsetWriter::finish`] prints the total.
    pub fn count_only(mut self, count_only: bool) -> Self {
        self.count_only = count_only;
        self
    }

    pub fn write(&mut self, offset: usize) -> io::Result<()> {
        self.written += 1;
        if self.count_only {
            return Ok(());
        }

        match self.format {
            OutputFormat::Text => {
                if self.written > 1 {
                    self.out.write_all(b" ")?;
                }
                write!(self.out, "{}", offset)
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &OffsetRecord { offset })?;
                self.out.write_all(b"\n")
            }
        }
    }

    /// Offsets seen so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Terminate the output and flush. Returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        match (self.format, self.count_only) {
            (OutputFormat::Text, true) => writeln!(self.out, "{}", self.written)?,
            (OutputFormat::Json, true) => {
                serde_json::to_writer(&mut self.out, &CountRecord { count: self.written })?;
                self.out.write_all(b"\n")?;
            }
            (OutputFormat::Text, false) if self.written > 0 => writeln!(self.out)?,
            _ => {}
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
