//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Find every occurrence of a pattern with `?` wildcards in a text stream
#[derive(Parser, Debug)]
#[command(name = "qmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "QMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pattern to search for (default: first line of input)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Read input from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write offsets to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Wildcard character (overrides config)
    #[arg(short, long, value_name = "CHAR")]
    pub wildcard: Option<char>,

    /// Print only the number of matches
    #[arg(long)]
    pub count: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(wildcard) = self.wildcard {
            config.wildcard = wildcard;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
