//! cache.rs - Memoizes compiled source filters.
//!
//! `PatternCache` is an explicit, injectable get-or-build cache. There is one entry
//! per source name; it also records a fingerprint of the words it was compiled
//! from, and a lookup with different words replaces it. Entries expire according
//! to an `ExpirationPolicy`, and expired entries are dropped whenever a new filter
//! is stored. Concurrent misses on the same name may compile twice; the later
//! insert simply replaces the earlier one.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::config::fingerprint_words;
use crate::errors::ProfanityError;
use crate::sanitizers::compiler::SourceFilter;

/// How long a compiled filter stays valid once stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpirationPolicy {
    /// Valid until the cache is cleared.
    #[default]
    Never,
    /// Valid for the given duration after it was inserted.
    AfterWrite(Duration),
}

#[derive(Debug)]
struct CacheEntry {
    fingerprint: u64,
    filter: Arc<SourceFilter>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, policy: ExpirationPolicy, now: Instant) -> bool {
        match policy {
            ExpirationPolicy::Never => false,
            ExpirationPolicy::AfterWrite(ttl) => now.duration_since(self.inserted_at) >= ttl,
        }
    }
}

/// A thread-safe cache of compiled [`SourceFilter`]s.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    policy: ExpirationPolicy,
    compilations: AtomicUsize,
}

impl PatternCache {
    /// Creates a cache whose entries never expire.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ExpirationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ExpirationPolicy {
        self.policy
    }

    /// Returns the compiled filter for a source, compiling it on a miss.
    ///
    /// A miss is never an error by itself; only a misconfigured source fails.
    pub fn get_or_build(
        &self,
        source_name: &str,
        words: &[String],
    ) -> Result<Arc<SourceFilter>, ProfanityError> {
        let fingerprint = fingerprint_words(source_name, words);

        // Read lock is released at the end of this block.
        {
            let cache = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = cache.get(source_name) {
                if entry.fingerprint != fingerprint {
                    debug!(
                        target: "profanity_core::cache",
                        "Words for '{}' changed; rebuilding.",
                        source_name
                    );
                } else if !entry.is_expired(self.policy, Instant::now()) {
                    debug!(
                        target: "profanity_core::cache",
                        "Serving compiled filter for '{}' from cache.",
                        source_name
                    );
                    return Ok(Arc::clone(&entry.filter));
                } else {
                    debug!(
                        target: "profanity_core::cache",
                        "Cached filter for '{}' expired; rebuilding.",
                        source_name
                    );
                }
            }
        }

        let filter = Arc::new(SourceFilter::new(
            source_name,
            words.iter().map(String::as_str),
        )?);
        self.compilations.fetch_add(1, Ordering::Relaxed);

        let now = Instant::now();
        let mut cache = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if self.policy != ExpirationPolicy::Never {
            cache.retain(|_, entry| !entry.is_expired(self.policy, now));
        }
        cache.insert(
            source_name.to_string(),
            CacheEntry {
                fingerprint,
                filter: Arc::clone(&filter),
                inserted_at: now,
            },
        );
        drop(cache);

        debug!(
            target: "profanity_core::cache",
            "Compiled and cached filter for '{}'.",
            source_name
        );
        Ok(filter)
    }

    /// Number of stored entries, expired ones not yet dropped included.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Drops expired entries and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut cache = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = cache.len();
        cache.retain(|_, entry| !entry.is_expired(self.policy, now));
        before - cache.len()
    }

    /// Total number of patterns compiled by this cache since it was created.
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }
}
