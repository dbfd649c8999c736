// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `qmark` command implementation.
//!
//! Reads the pattern (flag or first input line), streams the rest of the
//! input through the matcher and writes offsets as they are found.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;

use qmark::cli::Cli;
use qmark::config;
use qmark::input::read_pattern_line;
use qmark::output::OffsetWriter;
use qmark::pattern::Pattern;
use qmark::runner::{RunnerConfig, SearchRunner};

/// Run a search as described by the command line.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let mut input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let pattern_text = match &cli.pattern {
        Some(pattern) => pattern.clone(),
        None => read_pattern_line(&mut input)?,
    };
    let pattern = Pattern::parse(&pattern_text, config.wildcard, config.limits.max_pattern_len)?;
    tracing::debug!(
        len = pattern.len(),
        segments = pattern.segments().len(),
        "parsed pattern"
    );

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let writer =
        OffsetWriter::new(BufWriter::new(sink), cli.format).count_only(cli.count);

    let runner = SearchRunner::new(
        pattern,
        RunnerConfig {
            max_text_len: config.limits.max_text_len,
        },
    );
    let (summary, _) = runner.search(input, writer)?;
    tracing::debug!(
        chars = summary.chars,
        matches = summary.matches,
        states = summary.states,
        "run summary"
    );
    Ok(())
}
