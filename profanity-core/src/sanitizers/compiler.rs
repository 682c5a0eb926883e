//! compiler.rs - Compiles word sources into match patterns.
//!
//! A `SourceFilter` pairs a source name with its words and a single compiled
//! regular expression: an escaped alternation of every word, wrapped in word
//! boundaries and matched case-insensitively.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

use crate::errors::ProfanityError;

/// Upper bound for the compiled automaton of a single source.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// An immutable, compiled word source.
///
/// The pattern is derived once on construction and never changes, so a
/// `SourceFilter` can be shared freely between threads.
#[derive(Debug)]
pub struct SourceFilter {
    source_name: String,
    profane_words: Vec<String>,
    regex: Regex,
}

impl SourceFilter {
    /// Compiles `words` into a filter for `source_name`.
    ///
    /// Words keep their original spelling and order; case-insensitive duplicates
    /// are dropped after the first occurrence. Fails with a configuration error
    /// when the name is blank, the list is empty, or any word is blank.
    pub fn new<I, S>(source_name: impl Into<String>, words: I) -> Result<Self, ProfanityError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source_name = source_name.into();
        if source_name.trim().is_empty() {
            return Err(ProfanityError::configuration(
                source_name,
                "source name is empty",
            ));
        }

        let mut seen = HashSet::new();
        let mut profane_words = Vec::new();
        for (index, word) in words.into_iter().map(Into::into).enumerate() {
            if word.trim().is_empty() {
                return Err(ProfanityError::configuration(
                    source_name,
                    format!("word at position {} is empty", index),
                ));
            }
            if seen.insert(word.to_lowercase()) {
                profane_words.push(word);
            }
        }

        if profane_words.is_empty() {
            return Err(ProfanityError::configuration(
                source_name,
                "word list is empty",
            ));
        }

        let pattern = build_pattern(&profane_words);
        debug!(
            target: "profanity_core::compiler",
            "Compiling source '{}' with {} words.",
            &source_name,
            profane_words.len()
        );

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()
            .map_err(|e| ProfanityError::PatternCompilationError(source_name.clone(), e))?;

        debug!(
            target: "profanity_core::compiler",
            "Source '{}' compiled successfully.",
            &source_name
        );

        Ok(Self {
            source_name,
            profane_words,
            regex,
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn profane_words(&self) -> &[String] {
        &self.profane_words
    }

    /// The compiled, case-insensitive pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The pattern source text, without the case-insensitivity flag.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Builds the word-bounded alternation for a list of words.
///
/// Alternatives keep the supplied order; the regex engine prefers the leftmost
/// alternative that also satisfies the trailing boundary.
pub fn build_pattern(words: &[String]) -> String {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}
