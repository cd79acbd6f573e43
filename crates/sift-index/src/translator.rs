//! Query translator.
//!
//! Evaluates a segment tree against a standard (lenient) and a precise
//! (exact) token index.
//!
//! Each group of sibling segments is reduced in four steps:
//!
//! 1. Resolve every sibling to matches. Groups recurse, values look up their
//!    index through the cache, compulsory segments add their keys to the
//!    compulsory set and contribute their matches, excluding segments only add
//!    their keys to the exclusion set.
//! 2. Drop excluded keys and, if any compulsory segment was present, keys that
//!    none of them matched.
//! 3. Merge matches of the same key with the match combiner, concatenating
//!    their source locations.
//! 4. Return the merged entries in first-seen order.

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    slice,
};

use sift_query::Segment;
use tracing::{debug, trace};

use crate::{
    cache::ResultCache,
    combiner::MatchCombiner,
    entry::MatchedEntry,
    equality::PolicyKey,
    error::TranslateError,
    index::TokenIndex,
};

/// Evaluates segment trees against a standard and a precise index.
///
/// A translator can be shared between threads; the only shared mutable state
/// is the pair of lookup caches.
pub struct Translator<S, P, C>
where
    S: TokenIndex,
{
    /// Index consulted for standard values.
    standard: S,
    /// Index consulted for precise values.
    precise: P,
    /// Reduces the weights of one key.
    combiner: C,
    /// Memoized standard lookups.
    standard_cache: ResultCache<S::Key>,
    /// Memoized precise lookups.
    precise_cache: ResultCache<S::Key>,
}

impl<S, P, C> Translator<S, P, C>
where
    S: TokenIndex,
    P: TokenIndex<Key = S::Key, Equality = S::Equality>,
    C: MatchCombiner,
{
    /// Creates a translator with lookup caching enabled.
    pub fn new(standard: S, precise: P, combiner: C) -> Self {
        Self {
            standard,
            precise,
            combiner,
            standard_cache: ResultCache::new(),
            precise_cache: ResultCache::new(),
        }
    }

    /// Enables or disables lookup caching.
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        if enabled {
            self.standard_cache = ResultCache::new();
            self.precise_cache = ResultCache::new();
        } else {
            self.standard_cache = ResultCache::disabled();
            self.precise_cache = ResultCache::disabled();
        }
        self
    }

    /// Cache in front of the standard index.
    pub fn standard_cache(&self) -> &ResultCache<S::Key> {
        &self.standard_cache
    }

    /// Cache in front of the precise index.
    pub fn precise_cache(&self) -> &ResultCache<S::Key> {
        &self.precise_cache
    }

    /// Evaluates a segment tree into deduplicated, weighted matches.
    ///
    /// The order of the returned entries carries no ranking.
    pub fn evaluate(&self, segment: &Segment) -> Result<Vec<MatchedEntry<S::Key>>, TranslateError> {
        let matches = self.resolve(segment)?;
        debug!(
            target: "sift::translate",
            kind = segment.kind(),
            depth = segment.depth(),
            matches = matches.len(),
            "evaluated segment"
        );
        Ok(matches)
    }

    /// Resolves one segment; a group is reduced over its own children.
    fn resolve(&self, segment: &Segment) -> Result<Vec<MatchedEntry<S::Key>>, TranslateError> {
        match segment {
            Segment::Group(children) => self.reduce(children),
            other => self.reduce(slice::from_ref(other)),
        }
    }

    /// Reduces a list of sibling segments.
    fn reduce(&self, siblings: &[Segment]) -> Result<Vec<MatchedEntry<S::Key>>, TranslateError> {
        let equality = self.standard.key_equality();
        let mut accumulated: Vec<MatchedEntry<S::Key>> = Vec::new();
        let mut compulsory: Option<HashSet<PolicyKey<'_, S::Key, S::Equality>>> = None;
        let mut excluded: HashSet<PolicyKey<'_, S::Key, S::Equality>> = HashSet::new();

        for segment in siblings {
            match segment {
                Segment::NoMatch => {}
                Segment::StandardValue(text) => {
                    let matches = self
                        .standard_cache
                        .get_or_fetch(text, |term| self.standard.get_matches(term))?;
                    accumulated.extend(matches.iter().cloned());
                }
                Segment::PreciseValue(text) => {
                    let matches = self
                        .precise_cache
                        .get_or_fetch(text, |term| self.precise.get_matches(term))?;
                    accumulated.extend(matches.iter().cloned());
                }
                Segment::Group(children) => accumulated.extend(self.reduce(children)?),
                Segment::Compulsory(inner) => {
                    let matches = self.resolve(inner)?;
                    compulsory.get_or_insert_with(HashSet::new).extend(
                        matches
                            .iter()
                            .map(|entry| PolicyKey::new(entry.key.clone(), equality)),
                    );
                    accumulated.extend(matches);
                }
                Segment::Excluding(inner) => {
                    let matches = self.resolve(inner)?;
                    excluded.extend(
                        matches
                            .into_iter()
                            .map(|entry| PolicyKey::new(entry.key, equality)),
                    );
                }
                other => {
                    return Err(TranslateError::UnsupportedSegment { kind: other.kind() });
                }
            }
        }

        let before = accumulated.len();
        accumulated.retain(|entry| {
            let key = PolicyKey::new(entry.key.clone(), equality);
            !excluded.contains(&key) && compulsory.as_ref().is_none_or(|set| set.contains(&key))
        });
        trace!(
            target: "sift::translate",
            siblings = siblings.len(),
            dropped = before - accumulated.len(),
            compulsory = compulsory.is_some(),
            "filtered matches"
        );

        self.combine(accumulated, siblings)
    }

    /// Merges entries sharing a key and assigns their combined weight.
    fn combine(
        &self,
        entries: Vec<MatchedEntry<S::Key>>,
        siblings: &[Segment],
    ) -> Result<Vec<MatchedEntry<S::Key>>, TranslateError> {
        let equality = self.standard.key_equality();
        let mut positions: HashMap<PolicyKey<'_, S::Key, S::Equality>, usize> = HashMap::new();
        let mut merged: Vec<MatchedEntry<S::Key>> = Vec::new();
        let mut weights: Vec<Vec<f32>> = Vec::new();

        for entry in entries {
            match positions.entry(PolicyKey::new(entry.key.clone(), equality)) {
                Entry::Occupied(slot) => {
                    let position = *slot.get();
                    weights[position].push(entry.weight);
                    merged[position].locations.extend(entry.locations);
                }
                Entry::Vacant(slot) => {
                    slot.insert(merged.len());
                    weights.push(vec![entry.weight]);
                    merged.push(entry);
                }
            }
        }

        for (entry, weights) in merged.iter_mut().zip(&weights) {
            let weight = self.combiner.combine(weights, siblings);
            if !(weight.is_finite() && weight > 0.0) {
                return Err(TranslateError::InvalidWeight { weight });
            }
            entry.weight = weight;
        }

        Ok(merged)
    }
}
