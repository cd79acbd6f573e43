//! In-memory token index.

use std::collections::HashMap;

use crate::{
    entry::MatchedEntry,
    equality::{DefaultEquality, KeyEquality},
    error::IndexError,
    index::TokenIndex,
};

/// Maps a raw term to the form it is stored under.
pub type Normalizer = fn(&str) -> String;

/// A token index held in a hash map.
///
/// Terms are passed through the normalizer both when inserted and when looked
/// up, so a lowercasing normalizer gives a lenient index and the identity
/// normalizer gives an exact one.
#[derive(Debug, Clone)]
pub struct MemoryIndex<K, E = DefaultEquality> {
    /// Matches keyed by normalized token.
    tokens: HashMap<String, Vec<MatchedEntry<K>>>,
    /// Normalization applied to every term.
    normalizer: Normalizer,
    /// Key equality policy reported to the translator.
    equality: E,
}

impl<K> Default for MemoryIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MemoryIndex<K> {
    /// Creates an exact index: terms are stored and looked up verbatim.
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
            normalizer: str::to_owned,
            equality: DefaultEquality,
        }
    }

    /// Creates a lenient index that ignores case and surrounding whitespace.
    pub fn lowercase() -> Self {
        Self::new().with_normalizer(|term| term.trim().to_lowercase())
    }
}

impl<K, E> MemoryIndex<K, E> {
    /// Replaces the term normalizer.
    ///
    /// Only affects tokens inserted afterwards.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replaces the key equality policy.
    pub fn with_equality<E2>(self, equality: E2) -> MemoryIndex<K, E2> {
        MemoryIndex {
            tokens: self.tokens,
            normalizer: self.normalizer,
            equality,
        }
    }

    /// Adds a match for `token`.
    pub fn insert(&mut self, token: &str, entry: MatchedEntry<K>) {
        let token = (self.normalizer)(token);
        self.tokens.entry(token).or_default().push(entry);
    }

    /// Number of distinct normalized tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens have been inserted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K, E> TokenIndex for MemoryIndex<K, E>
where
    K: Clone,
    E: KeyEquality<K>,
{
    type Key = K;
    type Equality = E;

    fn get_matches(&self, term: &str) -> Result<Vec<MatchedEntry<K>>, IndexError> {
        if term.trim().is_empty() {
            return Err(IndexError::BlankTerm);
        }
        let token = (self.normalizer)(term);
        Ok(self.tokens.get(&token).cloned().unwrap_or_default())
    }

    fn key_equality(&self) -> &E {
        &self.equality
    }
}
