// profanity-core/src/engines/pipeline.rs
//! The multi-source filter pipeline.
//!
//! Sources run one after another over the current text. Each source sees the
//! output of the previous one, so once a span has been redacted, later sources
//! cannot match it again. The first source to claim a word wins.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::config::WordSource;
use crate::engine::ProfanityEngine;
use crate::errors::ProfanityError;
use crate::filter_result::{FilterResult, FilterStep, SourceSummary};
use crate::options::{FilterOptions, ReplacementStrategy};
use crate::registry::SourceRegistry;
use crate::sanitizers::cache::PatternCache;
use crate::sanitizers::replacement::apply_redactions;
use crate::sanitizers::scanner::scan;

#[derive(Debug, Clone)]
pub struct FilterPipeline {
    registry: SourceRegistry,
    cache: Arc<PatternCache>,
}

impl FilterPipeline {
    pub fn new(registry: SourceRegistry, cache: Arc<PatternCache>) -> Self {
        Self { registry, cache }
    }

    /// A pipeline over the embedded word lists with its own non-expiring cache.
    pub fn with_builtin_sources() -> Self {
        Self::new(
            SourceRegistry::with_builtin_sources(),
            Arc::new(PatternCache::new()),
        )
    }

    pub fn cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }

    /// Synchronous core of [`ProfanityEngine::filter_profanity`].
    pub fn filter(
        &self,
        input: Option<&str>,
        options: &FilterOptions,
    ) -> Result<FilterResult, ProfanityError> {
        let text = match input {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("Empty input; nothing to filter.");
                return Ok(FilterResult::unfiltered(input));
            }
        };

        let sources = self.registry.get_sources(&options.additional_sources)?;
        debug!(
            "Filtering {} bytes of {} text through {} sources with strategy '{}'.",
            text.len(),
            options.target,
            sources.len(),
            options.replacement_strategy
        );

        let mut current = text.to_string();
        let mut steps = Vec::with_capacity(sources.len());
        let mut aggregate = Vec::new();

        for source in sources {
            let filter = self.cache.get_or_build(&source.name, &source.words)?;
            let matches = scan(&filter, &current);

            if matches.is_empty() {
                steps.push(FilterStep {
                    profane_source_data: source.name.clone(),
                    is_filtered: false,
                    matches,
                    output_after_step: current.clone(),
                });
                continue;
            }

            let updated = apply_redactions(&current, &matches, options.replacement_strategy);
            debug!(
                "Source '{}' redacted {} match(es).",
                source.name,
                matches.len()
            );
            aggregate.extend(matches.iter().cloned());
            steps.push(FilterStep {
                profane_source_data: source.name.clone(),
                is_filtered: true,
                matches,
                output_after_step: updated.clone(),
            });
            current = updated;
        }

        let is_filtered = !aggregate.is_empty();
        if is_filtered {
            info!(
                "Filtered {} match(es) across {} step(s).",
                aggregate.len(),
                steps.iter().filter(|s| s.is_filtered).count()
            );
        }

        Ok(FilterResult {
            original_input: Some(text.to_string()),
            final_output: Some(current),
            is_filtered,
            matches: is_filtered.then_some(aggregate),
            steps,
        })
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::with_builtin_sources()
    }
}

#[async_trait]
impl ProfanityEngine for FilterPipeline {
    async fn filter_profanity(
        &self,
        input: Option<&str>,
        options: &FilterOptions,
    ) -> Result<FilterResult, ProfanityError> {
        self.filter(input, options)
    }

    fn analyze_for_stats(
        &self,
        content: &str,
        additional_sources: &[WordSource],
    ) -> Result<Vec<SourceSummary>, ProfanityError> {
        let options = FilterOptions {
            replacement_strategy: ReplacementStrategy::Asterisk,
            additional_sources: additional_sources.to_vec(),
            ..FilterOptions::default()
        };
        Ok(self.filter(Some(content), &options)?.summary())
    }

    fn registry(&self) -> &SourceRegistry {
        &self.registry
    }
}
