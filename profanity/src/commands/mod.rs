//! Command implementations for the `profanity` CLI.

pub mod filter;
pub mod scan;
pub mod sources;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use profanity_core::{
    CacheConfig, FilterPipeline, PatternCache, SourceConfig, SourceRegistry, WordSource,
};

use crate::cli::SourceArgs;

/// Source name used for words passed with `--words`.
pub const CUSTOM_SOURCE_NAME: &str = "Custom";

/// Reads the whole input from a file, or from stdin when no file is given.
pub fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Additional sources from `--sources` and `--words`, plus the cache settings.
///
/// File sources come first; the `--words` source is appended last, so a file
/// source named `Custom` takes precedence over it.
pub fn load_additional_sources(args: &SourceArgs) -> Result<(Vec<WordSource>, CacheConfig)> {
    let mut config = match &args.sources_file {
        Some(path) => SourceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load sources from {}", path.display()))?,
        None => SourceConfig::default(),
    };

    let words: Vec<String> = args
        .words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if !words.is_empty() {
        if config.sources.iter().any(|s| s.name == CUSTOM_SOURCE_NAME) {
            warn!(
                "The sources file already defines '{}'; words passed with --words are ignored.",
                CUSTOM_SOURCE_NAME
            );
        }
        config.sources.push(WordSource::new(CUSTOM_SOURCE_NAME, words));
    }

    debug!("Using {} additional source(s).", config.sources.len());
    Ok((config.sources, config.cache))
}

/// Builds a pipeline over the built-in sources with a cache honoring `cache`.
pub fn build_pipeline(cache: &CacheConfig) -> FilterPipeline {
    FilterPipeline::new(
        SourceRegistry::with_builtin_sources(),
        Arc::new(PatternCache::with_policy(cache.expiration_policy())),
    )
}
