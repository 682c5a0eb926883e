//! Provides the match record produced by scanning and the logging helpers that
//! keep matched words out of debug output unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Whether matched words may appear verbatim in debug logs.
    static ref WORDS_DEBUG_ALLOWED: bool = {
        std::env::var("PROFANITY_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single whole-word match found by a source.
///
/// `start` and `length` are UTF-8 byte offsets into the text the producing step
/// scanned, which may already carry redactions from earlier sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfaneMatch {
    /// The matched text, with its original casing.
    pub value: String,
    pub start: usize,
    pub length: usize,
    /// Name of the source whose pattern matched.
    pub source_name: String,
}

impl ProfaneMatch {
    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Masks a matched word for logging.
pub fn redact_sensitive(s: &str) -> String {
    format!("[REDACTED: {} chars]", s.chars().count())
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *WORDS_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_match_debug(module_path: &str, m: &ProfaneMatch) {
    debug!(
        "{} Found match: Source='{}', Value='{}', Start={}, Length={}",
        module_path,
        m.source_name,
        get_loggable_content(&m.value),
        m.start,
        m.length
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    source_name: &str,
    original: &str,
    replacement: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for source '{}'",
        module_path,
        get_loggable_content(original),
        replacement,
        source_name
    );
}
