//! registry.rs - Ordered source composition.
//!
//! The registry owns the built-in sources and appends caller-supplied sources for
//! each request, keeping only the first source seen under any given name.
//! A dropped duplicate still has to carry a usable word list.

use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{builtin_sources, WordSource};
use crate::errors::ProfanityError;

#[derive(Debug, Clone)]
pub struct SourceRegistry {
    builtin: Arc<Vec<WordSource>>,
}

impl SourceRegistry {
    /// A registry over an explicit list of built-in sources, in consultation order.
    pub fn new(builtin: Vec<WordSource>) -> Self {
        Self {
            builtin: Arc::new(builtin),
        }
    }

    /// A registry over the embedded word lists.
    pub fn with_builtin_sources() -> Self {
        Self::new(builtin_sources().to_vec())
    }

    pub fn builtin_sources(&self) -> &[WordSource] {
        &self.builtin
    }

    /// Built-ins followed by `additional`, deduplicated by name (first wins).
    ///
    /// # Errors
    /// A duplicate that is dropped but has an empty or blank word list is a
    /// configuration error. Sources that are kept are checked when compiled.
    pub fn get_sources<'a>(
        &'a self,
        additional: &'a [WordSource],
    ) -> Result<Vec<&'a WordSource>, ProfanityError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ordered = Vec::with_capacity(self.builtin.len() + additional.len());

        for source in self.builtin.iter().chain(additional.iter()) {
            if seen.insert(source.name.as_str()) {
                ordered.push(source);
            } else {
                check_dropped_duplicate(source)?;
                debug!("Skipping duplicate source '{}'.", source.name);
            }
        }
        Ok(ordered)
    }
}

fn check_dropped_duplicate(source: &WordSource) -> Result<(), ProfanityError> {
    if source.words.is_empty() {
        return Err(ProfanityError::configuration(
            source.name.as_str(),
            "duplicate source has an empty word list",
        ));
    }
    if let Some(index) = source.words.iter().position(|w| w.trim().is_empty()) {
        return Err(ProfanityError::configuration(
            source.name.as_str(),
            format!("duplicate source has an empty word at position {}", index),
        ));
    }
    Ok(())
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_builtin_sources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BUILTIN_SOURCE_FILES;

    fn names<'a>(sources: &[&'a WordSource]) -> Vec<&'a str> {
        sources.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_builtins_come_first_in_fixed_order() {
        let registry = SourceRegistry::with_builtin_sources();
        let extra = vec![WordSource::new("Custom", ["WebForms"])];
        let sources = registry.get_sources(&extra).unwrap();
        let expected: Vec<&str> = BUILTIN_SOURCE_FILES
            .iter()
            .map(|(name, _)| *name)
            .chain(std::iter::once("Custom"))
            .collect();
        assert_eq!(names(&sources), expected);
    }

    #[test]
    fn test_duplicate_additional_sources_are_dropped() {
        let registry = SourceRegistry::new(vec![WordSource::new("Base", ["crap"])]);
        let extra = vec![
            WordSource::new("Custom", ["one"]),
            WordSource::new("Base", ["two"]),
            WordSource::new("Custom", ["three"]),
            WordSource::new("Other", ["four"]),
        ];
        let sources = registry.get_sources(&extra).unwrap();
        assert_eq!(names(&sources), vec!["Base", "Custom", "Other"]);
        assert_eq!(sources[0].words, vec!["crap".to_string()]);
        assert_eq!(sources[1].words, vec!["one".to_string()]);
    }

    #[test]
    fn test_no_additional_sources() {
        let registry = SourceRegistry::new(vec![WordSource::new("Base", ["crap"])]);
        assert_eq!(names(&registry.get_sources(&[]).unwrap()), vec!["Base"]);
    }

    #[test]
    fn test_duplicate_with_empty_words_is_configuration_error() {
        let registry = SourceRegistry::new(vec![WordSource::new("Base", ["crap"])]);
        let extra = vec![
            WordSource::new("Custom", ["WebForms"]),
            WordSource::new("Custom", Vec::<String>::new()),
        ];
        let err = registry.get_sources(&extra).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("'Custom'"));
    }

    #[test]
    fn test_duplicate_with_blank_word_is_configuration_error() {
        let registry = SourceRegistry::new(vec![WordSource::new("Base", ["crap"])]);
        let extra = vec![WordSource::new("Base", ["ok", "  "])];
        let err = registry.get_sources(&extra).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }
}
