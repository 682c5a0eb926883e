// profanity-core/src/engine.rs
//! Defines the core `ProfanityEngine` trait.
//!
//! The trait decouples callers (the CLI, a web handler) from the pipeline that
//! does the work. Its filtering entry point is async so it composes with other
//! I/O on a tokio runtime; the work behind it never suspends.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;

use crate::config::WordSource;
use crate::errors::ProfanityError;
use crate::filter_result::{FilterResult, SourceSummary};
use crate::options::FilterOptions;
use crate::registry::SourceRegistry;

#[async_trait]
pub trait ProfanityEngine: Send + Sync {
    /// Filters `input` through every source and returns the step-by-step result.
    ///
    /// # Arguments
    /// * `input` - The text to filter; `None` and `""` are returned untouched.
    /// * `options` - Replacement strategy, target and additional sources.
    ///
    /// # Errors
    /// A misconfigured source aborts the call with a configuration error.
    async fn filter_profanity(
        &self,
        input: Option<&str>,
        options: &FilterOptions,
    ) -> Result<FilterResult, ProfanityError>;

    /// Reports which sources matched `content`, without handing back redacted text.
    fn analyze_for_stats(
        &self,
        content: &str,
        additional_sources: &[WordSource],
    ) -> Result<Vec<SourceSummary>, ProfanityError>;

    /// The registry supplying built-in sources.
    fn registry(&self) -> &SourceRegistry;
}
