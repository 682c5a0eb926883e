//! scanner.rs - Finds whole-word matches of one compiled source.

use crate::redaction_match::{log_match_debug, ProfaneMatch};
use crate::sanitizers::compiler::SourceFilter;

/// Finds every non-overlapping match of `filter` in `text`, left to right.
///
/// Empty text yields no matches.
pub fn scan(filter: &SourceFilter, text: &str) -> Vec<ProfaneMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    filter
        .regex()
        .find_iter(text)
        .map(|found| {
            let m = ProfaneMatch {
                value: found.as_str().to_string(),
                start: found.start(),
                length: found.len(),
                source_name: filter.source_name().to_string(),
            };
            log_match_debug("profanity_core::scanner", &m);
            m
        })
        .collect()
}
