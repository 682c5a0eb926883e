// profanity/src/cli.rs
//! This file defines the command-line interface for the `profanity` application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use profanity_core::{FilterTarget, ReplacementStrategy};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "profanity",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact profane words in text",
    long_about = "profanity scans text against a set of named word lists (built-in lexicons plus your own), redacts every whole-word, case-insensitive match with the chosen strategy, and reports which list matched what.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `profanity` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filters an input file or stdin, redacting profane words.
    #[command(about = "Filters an input file or stdin, redacting profane words.")]
    Filter(FilterCommand),

    /// Scans an input and reports matches per source without printing redacted text.
    #[command(about = "Scans an input and reports matches per source without printing redacted text.")]
    Scan(ScanCommand),

    /// Lists the built-in word sources.
    #[command(about = "Lists the built-in word sources in the order they are applied.")]
    Sources,
}

/// Word-source arguments shared by `filter` and `scan`.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// YAML file with additional sources.
    #[arg(long = "sources", value_name = "FILE", env = "PROFANITY_SOURCES_FILE", help = "Path to a YAML file of additional word sources.")]
    pub sources_file: Option<PathBuf>,

    /// Extra words, registered as the source `Custom`.
    #[arg(long = "words", short = 'w', value_delimiter = ',', help = "Extra profane words (comma-separated), applied as the source 'Custom'.")]
    pub words: Vec<String>,
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write filtered output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Replacement strategy.
    #[arg(long, short = 's', value_enum, default_value = "asterisk", env = "PROFANITY_STRATEGY", help = "How matched words are redacted.")]
    pub strategy: StrategyChoice,

    /// What the input represents.
    #[arg(long, short = 't', value_enum, default_value = "body", help = "Whether the input is a title or a body (metadata only).")]
    pub target: TargetChoice,

    #[command(flatten)]
    pub source_args: SourceArgs,

    /// Print the full filter result as JSON.
    #[arg(long = "json", help = "Print the full filter result (steps and matches) as JSON instead of plain text.")]
    pub json: bool,

    /// Suppress the per-step summary.
    #[arg(long = "no-summary", help = "Suppress the per-source step summary on stderr.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[command(flatten)]
    pub source_args: SourceArgs,

    /// Exit with a non-zero code if more than N words matched.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of matched words exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Print the scan summary as JSON to stdout.
    #[arg(long = "json-stdout", help = "Export the scan summary to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Replacement strategy choices on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StrategyChoice {
    /// `****`
    Asterisk,
    /// `bleep`
    Bleep,
    /// A censor emoji
    Emoji,
    /// `c**p`
    MiddleAsterisk,
}

impl From<StrategyChoice> for ReplacementStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Asterisk => ReplacementStrategy::Asterisk,
            StrategyChoice::Bleep => ReplacementStrategy::Bleep,
            StrategyChoice::Emoji => ReplacementStrategy::Emoji,
            StrategyChoice::MiddleAsterisk => ReplacementStrategy::MiddleAsterisk,
        }
    }
}

/// Filter target choices on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TargetChoice {
    Title,
    Body,
}

impl From<TargetChoice> for FilterTarget {
    fn from(choice: TargetChoice) -> Self {
        match choice {
            TargetChoice::Title => FilterTarget::Title,
            TargetChoice::Body => FilterTarget::Body,
        }
    }
}
