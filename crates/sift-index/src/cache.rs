//! Per-index memoization of term lookups.

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use tracing::trace;

use crate::{entry::MatchedEntry, error::IndexError};

/// Memoizes index lookups by term.
///
/// The lock is held only to read or insert an entry, never during the lookup
/// itself. Two threads missing on the same term may both query the index;
/// the last insert wins and both values are equivalent.
#[derive(Debug)]
pub struct ResultCache<K> {
    /// Lookup results keyed by the term as passed to the index.
    entries: Mutex<HashMap<String, Arc<[MatchedEntry<K>]>>>,
    /// When false, every lookup goes straight to the index.
    enabled: bool,
}

impl<K> Default for ResultCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ResultCache<K> {
    /// Creates an empty, enabled cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            enabled: true,
        }
    }

    /// Creates a cache that never stores anything.
    pub fn disabled() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            enabled: false,
        }
    }

    /// Returns true if results are memoized.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the cached matches for `term`, calling `fetch` on a miss.
    ///
    /// Failed lookups are not cached.
    pub fn get_or_fetch<F>(&self, term: &str, fetch: F) -> Result<Arc<[MatchedEntry<K>]>, IndexError>
    where
        F: FnOnce(&str) -> Result<Vec<MatchedEntry<K>>, IndexError>,
    {
        if !self.enabled {
            return fetch(term).map(Arc::from);
        }

        if let Some(hit) = self.entries.lock().get(term).cloned() {
            trace!(target: "sift::cache", term, "cache hit");
            return Ok(hit);
        }

        trace!(target: "sift::cache", term, "cache miss");
        let matches: Arc<[MatchedEntry<K>]> = Arc::from(fetch(term)?);
        self.entries
            .lock()
            .insert(term.to_owned(), Arc::clone(&matches));
        Ok(matches)
    }

    /// Number of cached terms.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;
    use crate::entry::SourceLocation;

    fn fetch_one(term: &str) -> Result<Vec<MatchedEntry<String>>, IndexError> {
        Ok(vec![MatchedEntry::new(
            term.to_owned(),
            1.0,
            vec![SourceLocation::new(0, 0, 0, term.len())],
        )])
    }

    #[test]
    fn second_lookup_hits_cache() {
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);
        let counted = |term: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            fetch_one(term)
        };

        let first = cache.get_or_fetch("rust", counted).unwrap();
        let second = cache.get_or_fetch("rust", counted).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn terms_are_cached_separately() {
        let cache = ResultCache::new();
        cache.get_or_fetch("a", fetch_one).unwrap();
        cache.get_or_fetch("b", fetch_one).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn errors_are_not_cached() {
        let cache: ResultCache<String> = ResultCache::new();
        let err = cache
            .get_or_fetch(" ", |_| Err(IndexError::BlankTerm))
            .unwrap_err();
        assert_eq!(err, IndexError::BlankTerm);
        assert!(cache.is_empty());
    }

    #[test]
    fn disabled_cache_always_fetches() {
        let cache = ResultCache::disabled();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            cache
                .get_or_fetch("rust", |term| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    fetch_one(term)
                })
                .unwrap();
        }
        assert!(!cache.is_enabled());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_lookups_agree() {
        let cache = ResultCache::new();
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for term in ["a", "b", "c"] {
                        let matches = cache.get_or_fetch(term, fetch_one).unwrap();
                        assert_eq!(matches[0].key, term);
                    }
                });
            }
        });
        assert_eq!(cache.len(), 3);
    }
}
