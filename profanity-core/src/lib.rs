// profanity-core/src/lib.rs
//! # Profanity Core Library
//!
//! `profanity-core` provides the filtering engine behind the profanity filter:
//! it compiles named word sources into whole-word, case-insensitive patterns,
//! caches the compiled patterns, runs every source in a fixed order over the
//! text, and records which source redacted what.
//!
//! The library does no I/O of its own beyond reading an optional YAML file of
//! additional sources. The built-in word lists are embedded at compile time.
//!
//! ## Modules
//!
//! * `config`: `WordSource`, the embedded built-in lists and `SourceConfig` loading.
//! * `options`: `FilterOptions`, `ReplacementStrategy` and `FilterTarget`.
//! * `sanitizers`: compilation (`SourceFilter`), caching (`PatternCache`),
//!   scanning and replacement.
//! * `registry`: ordered, deduplicated composition of built-in and extra sources.
//! * `engine`: the `ProfanityEngine` trait.
//! * `engines`: the `FilterPipeline` implementation.
//! * `filter_result`: `FilterStep`, `FilterResult` and per-source summaries.
//! * `redaction_match`: the `ProfaneMatch` record and log masking helpers.
//! * `headless`: one-shot convenience wrapper.
//!
//! ## Usage Example
//!
//! ```rust
//! use profanity_core::{FilterOptions, FilterPipeline, FilterTarget, ReplacementStrategy, WordSource};
//!
//! fn main() -> Result<(), profanity_core::ProfanityError> {
//!     let pipeline = FilterPipeline::with_builtin_sources();
//!     let options = FilterOptions::new(ReplacementStrategy::Bleep, FilterTarget::Title)
//!         .with_additional_sources([WordSource::new("Custom", ["WebForms"])]);
//!
//!     let result = pipeline.filter(Some("I love WebForms!"), &options)?;
//!     assert_eq!(result.output(), "I love bleep!");
//!     assert!(result.is_filtered);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Filtering returns `ProfanityError`; a misconfigured source (empty word list,
//! blank word) aborts the call. Clean input and empty input are successes:
//! check `FilterResult::is_filtered`. File loading uses `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter_result;
pub mod headless;
pub mod options;
pub mod redaction_match;
pub mod registry;
pub mod sanitizers;

/// Re-exports the word source types and configuration loading.
pub use config::{
    builtin_sources, validate_sources, CacheConfig, SourceConfig, WordSource,
    BUILTIN_SOURCE_FILES,
};

pub use errors::ProfanityError;

pub use engine::ProfanityEngine;
pub use engines::pipeline::FilterPipeline;

pub use filter_result::{FilterResult, FilterStep, SourceSummary};
pub use options::{FilterOptions, FilterTarget, ReplacementStrategy};
pub use redaction_match::ProfaneMatch;
pub use registry::SourceRegistry;

pub use sanitizers::cache::{ExpirationPolicy, PatternCache};
pub use sanitizers::compiler::SourceFilter;
pub use sanitizers::replacement::{redact, BLEEP, CENSOR_EMOJI};
pub use sanitizers::scanner::scan;

pub use headless::headless_filter_string;
