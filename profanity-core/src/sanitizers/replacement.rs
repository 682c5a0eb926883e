//! replacement.rs - Turns matches into redacted text.
//!
//! Replacement only looks at the matched text itself: its character count and,
//! for `MiddleAsterisk`, its first and last characters.

use crate::options::ReplacementStrategy;
use crate::redaction_match::{log_redaction_action_debug, ProfaneMatch};

/// Replacement used by [`ReplacementStrategy::Bleep`].
pub const BLEEP: &str = "bleep";

/// Replacement used by [`ReplacementStrategy::Emoji`].
pub const CENSOR_EMOJI: &str = "🤬";

/// Produces the redacted form of `matched` under `strategy`.
pub fn redact(matched: &str, strategy: ReplacementStrategy) -> String {
    match strategy {
        ReplacementStrategy::Asterisk => asterisks(matched.chars().count()),
        ReplacementStrategy::Bleep => BLEEP.to_string(),
        ReplacementStrategy::Emoji => CENSOR_EMOJI.to_string(),
        ReplacementStrategy::MiddleAsterisk => middle_asterisks(matched),
    }
}

fn asterisks(count: usize) -> String {
    "*".repeat(count)
}

fn middle_asterisks(matched: &str) -> String {
    let chars: Vec<char> = matched.chars().collect();
    match chars.as_slice() {
        [first, inner @ .., last] if !inner.is_empty() => {
            let mut out = String::with_capacity(matched.len());
            out.push(*first);
            out.push_str(&asterisks(inner.len()));
            out.push(*last);
            out
        }
        // Nothing between first and last to hide.
        _ => asterisks(chars.len()),
    }
}

/// Rewrites every match in `text` and returns the new text.
///
/// `matches` must come from scanning `text` and be ordered by `start`;
/// overlapping entries are skipped.
pub fn apply_redactions(
    text: &str,
    matches: &[ProfaneMatch],
    strategy: ReplacementStrategy,
) -> String {
    let mut redacted = String::with_capacity(text.len());
    let mut last_end = 0usize;

    for m in matches {
        if m.start < last_end || m.end() > text.len() {
            continue;
        }
        let replacement = redact(&m.value, strategy);
        log_redaction_action_debug(
            "profanity_core::replacement",
            &m.source_name,
            &m.value,
            &replacement,
        );
        redacted.push_str(&text[last_end..m.start]);
        redacted.push_str(&replacement);
        last_end = m.end();
    }
    redacted.push_str(&text[last_end..]);
    redacted
}
