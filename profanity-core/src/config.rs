//! Configuration management for `profanity-core`.
//!
//! This module defines the word source data structures and the configuration that
//! carries caller-supplied sources and cache settings. It embeds the built-in word
//! lists, parses them once at first use, and loads additional sources from YAML.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Duration;

use crate::sanitizers::cache::ExpirationPolicy;

/// The built-in word lists, in the order the pipeline consults them.
///
/// This order is observable through `FilterResult::steps`; do not reorder casually.
pub const BUILTIN_SOURCE_FILES: [(&str, &str); 9] = [
    ("AmericanCurseWords.txt", include_str!("../config/sources/AmericanCurseWords.txt")),
    ("AustralianSwearWords.txt", include_str!("../config/sources/AustralianSwearWords.txt")),
    ("BritishSwearWords.txt", include_str!("../config/sources/BritishSwearWords.txt")),
    ("CanadianCurseWords.txt", include_str!("../config/sources/CanadianCurseWords.txt")),
    ("FrenchCurseWords.txt", include_str!("../config/sources/FrenchCurseWords.txt")),
    ("GermanSwearWords.txt", include_str!("../config/sources/GermanSwearWords.txt")),
    ("GoogleBannedWords.txt", include_str!("../config/sources/GoogleBannedWords.txt")),
    ("ItalianSwearWords.txt", include_str!("../config/sources/ItalianSwearWords.txt")),
    ("SpanishSwearWords.txt", include_str!("../config/sources/SpanishSwearWords.txt")),
];

lazy_static! {
    /// Built-in sources, parsed once from the embedded word lists.
    static ref BUILTIN_SOURCES: Vec<WordSource> = BUILTIN_SOURCE_FILES
        .iter()
        .map(|(name, text)| WordSource::from_word_list(*name, text))
        .collect();
}

/// A named list of profane words, as supplied by a word-list collaborator.
///
/// This is the raw form of a source. It is compiled into a
/// [`SourceFilter`](crate::sanitizers::compiler::SourceFilter) on first use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct WordSource {
    /// Identifier recorded on every step this source produces.
    pub name: String,
    /// Words in the order they were supplied.
    pub words: Vec<String>,
}

impl WordSource {
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a source from a plain-text word list: one word or phrase per line.
    pub fn from_word_list(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            words: parse_word_list(text),
        }
    }
}

/// Hashes a source name and word list into a cache fingerprint.
///
/// Equal fingerprints compile to interchangeable filters.
pub fn fingerprint_words(name: &str, words: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    words.hash(&mut hasher);
    hasher.finish()
}

/// Parses a plain-text word list. Blank lines and `#` comments are skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Returns the built-in sources in their fixed order.
pub fn builtin_sources() -> &'static [WordSource] {
    &BUILTIN_SOURCES
}

/// Cache settings for compiled source filters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a compiled filter stays valid. `None` keeps it until cleared.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn expiration_policy(&self) -> ExpirationPolicy {
        match self.ttl_secs {
            Some(secs) => ExpirationPolicy::AfterWrite(Duration::from_secs(secs)),
            None => ExpirationPolicy::Never,
        }
    }
}

/// Represents the top-level configuration file for additional sources.
///
/// ```yaml
/// sources:
///   - name: Custom
///     words: ["WebForms"]
/// cache:
///   ttl_secs: 3600
/// ```
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// Caller-supplied sources, consulted after the built-ins.
    #[serde(default)]
    pub sources: Vec<WordSource>,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl SourceConfig {
    /// Loads additional sources from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading additional sources from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file {}", path.display()))?;
        let config: SourceConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse source file {}", path.display()))?;

        validate_sources(&config.sources)?;
        info!(
            "Loaded {} sources from file {}.",
            config.sources.len(),
            path.display()
        );

        Ok(config)
    }
}

/// Validates source integrity: non-blank names, non-empty word lists, no blank words.
///
/// Duplicate names are only warned about; the registry keeps the first occurrence.
pub fn validate_sources(sources: &[WordSource]) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for source in sources {
        if source.name.trim().is_empty() {
            errors.push("A source has an empty `name` field.".to_string());
        } else if !names.insert(source.name.as_str()) {
            warn!(
                "Duplicate source name '{}' found; only the first occurrence is used.",
                source.name
            );
        }

        if source.words.is_empty() {
            errors.push(format!("Source '{}' has no words.", source.name));
        }

        for (index, word) in source.words.iter().enumerate() {
            if word.trim().is_empty() {
                errors.push(format!(
                    "Source '{}' has an empty word at position {}.",
                    source.name, index
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Source validation failed:\n{}", errors.join("\n")))
    }
}
