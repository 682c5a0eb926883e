//! filter_result.rs - Step-by-step record of a filter call.
//!
//! A `FilterResult` owns one `FilterStep` per source consulted, in consultation
//! order, plus the merged output and the aggregate matches.

use serde::{Deserialize, Serialize};

use crate::redaction_match::ProfaneMatch;

/// The outcome of running one source's pattern against the text at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStep {
    /// Name of the source that ran in this step.
    pub profane_source_data: String,
    pub is_filtered: bool,
    /// Matches in the text this step scanned, ordered by `start`.
    pub matches: Vec<ProfaneMatch>,
    pub output_after_step: String,
}

/// The full result of a filter call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// `None` when the caller passed no text.
    pub original_input: Option<String>,
    pub final_output: Option<String>,
    pub is_filtered: bool,
    /// Every match across all steps; `None` when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<ProfaneMatch>>,
    pub steps: Vec<FilterStep>,
}

/// Per-source totals of a filter call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source_name: String,
    pub occurrences: usize,
    pub matched_words: Vec<String>,
}

impl FilterResult {
    /// The result for absent or empty input: nothing scanned, nothing filtered.
    pub fn unfiltered(input: Option<&str>) -> Self {
        Self {
            original_input: input.map(str::to_string),
            final_output: input.map(str::to_string),
            is_filtered: false,
            matches: None,
            steps: Vec::new(),
        }
    }

    /// The filtered text, or `""` when the input was absent.
    pub fn output(&self) -> &str {
        self.final_output.as_deref().unwrap_or_default()
    }

    /// Number of matches across all steps.
    pub fn match_count(&self) -> usize {
        self.matches.as_ref().map_or(0, Vec::len)
    }

    pub fn filtered_steps(&self) -> impl Iterator<Item = &FilterStep> {
        self.steps.iter().filter(|step| step.is_filtered)
    }

    /// Summarizes the steps that matched, in step order.
    pub fn summary(&self) -> Vec<SourceSummary> {
        self.filtered_steps()
            .map(|step| SourceSummary {
                source_name: step.profane_source_data.clone(),
                occurrences: step.matches.len(),
                matched_words: step.matches.iter().map(|m| m.value.clone()).collect(),
            })
            .collect()
    }
}
