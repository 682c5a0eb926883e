// File: profanity-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot, non-interactive filtering of a string.

use anyhow::Result;

use crate::config::WordSource;
use crate::engines::pipeline::FilterPipeline;
use crate::options::{FilterOptions, FilterTarget, ReplacementStrategy};

/// Filters `content` through the built-in sources plus `additional_sources` and
/// returns only the final text.
///
/// Each call builds a fresh pipeline and cache; long-lived callers should hold a
/// [`FilterPipeline`] instead so compiled patterns are reused.
pub fn headless_filter_string(
    content: &str,
    strategy: ReplacementStrategy,
    additional_sources: Vec<WordSource>,
) -> Result<String> {
    let pipeline = FilterPipeline::with_builtin_sources();
    let options = FilterOptions::new(strategy, FilterTarget::Body)
        .with_additional_sources(additional_sources);

    let result = pipeline.filter(Some(content), &options)?;
    Ok(result.output().to_string())
}
