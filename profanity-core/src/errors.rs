//! errors.rs - Custom error types for the profanity-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `profanity-core` library.
///
/// New variants may be added in future versions, hence `#[non_exhaustive]`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfanityError {
    /// A word source is unusable: blank name, empty word list or a blank word.
    #[error("Invalid configuration for source '{0}': {1}")]
    ConfigurationError(String, String),

    #[error("Failed to compile pattern for source '{0}': {1}")]
    PatternCompilationError(String, regex::Error),
}

impl ProfanityError {
    /// Create a configuration error for the named source.
    pub fn configuration(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigurationError(source_name.into(), reason.into())
    }

    /// Returns true when the error points at a misconfigured word source.
    ///
    /// A pattern the regex engine refuses to build is a configuration problem too:
    /// the caller has to fix the word list, not retry.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(..) | Self::PatternCompilationError(..)
        )
    }
}
