// File: profanity-core/src/options.rs

//! options.rs - Per-call filter options.
//!
//! `FilterOptions` selects how matches are redacted, which field of the caller's
//! content is being filtered, and which extra word sources to consult after the
//! built-ins.
//!
//! license: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::WordSource;

/// How a matched word is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementStrategy {
    /// `crap` becomes `****`.
    #[default]
    Asterisk,
    /// `crap` becomes `bleep`.
    Bleep,
    /// `crap` becomes a censor emoji.
    Emoji,
    /// `crap` becomes `c**p`.
    MiddleAsterisk,
}

impl fmt::Display for ReplacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Asterisk => "asterisk",
            Self::Bleep => "bleep",
            Self::Emoji => "emoji",
            Self::MiddleAsterisk => "middle_asterisk",
        };
        f.write_str(name)
    }
}

/// Which part of the caller's content is filtered. Carried as metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTarget {
    Title,
    #[default]
    Body,
}

impl fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// Options for a single filter call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub replacement_strategy: ReplacementStrategy,
    pub target: FilterTarget,
    /// Consulted after the built-ins, in this order. Names already seen are skipped.
    pub additional_sources: Vec<WordSource>,
}

impl FilterOptions {
    pub fn new(replacement_strategy: ReplacementStrategy, target: FilterTarget) -> Self {
        Self {
            replacement_strategy,
            target,
            additional_sources: Vec::new(),
        }
    }

    pub fn with_additional_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = WordSource>,
    {
        self.additional_sources.extend(sources);
        self
    }
}
