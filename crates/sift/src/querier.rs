//! The search facade.

use sift_config::{CombinerName, Settings};
use sift_index::{CombinerKind, MatchCombiner, MatchedEntry, TokenIndex, Translator};
use sift_query::{Analyzer, Segment};
use tracing::debug;

use crate::error::SearchError;

/// Parses search strings and evaluates them against two token indexes.
pub struct Querier<S, P, C>
where
    S: TokenIndex,
{
    /// Parser for search strings.
    analyzer: Analyzer,
    /// Evaluator for parsed segments.
    translator: Translator<S, P, C>,
    /// Maximum number of results (0 = unlimited).
    limit: usize,
}

impl<S, P, C> Querier<S, P, C>
where
    S: TokenIndex,
    P: TokenIndex<Key = S::Key, Equality = S::Equality>,
    C: MatchCombiner,
{
    /// Creates a querier over a standard and a precise index.
    pub fn new(standard: S, precise: P, combiner: C) -> Self {
        Self {
            analyzer: Analyzer::new(),
            translator: Translator::new(standard, precise, combiner),
            limit: 0,
        }
    }

    /// Enables or disables memoization of index lookups.
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.translator = self.translator.with_cache(enabled);
        self
    }

    /// Caps the number of results returned by [`search`](Self::search).
    ///
    /// A limit of 0 returns every match.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The underlying translator.
    pub fn translator(&self) -> &Translator<S, P, C> {
        &self.translator
    }

    /// Parses a search string without evaluating it.
    pub fn parse(&self, query: &str) -> Segment {
        self.analyzer.parse(query)
    }

    /// Searches both indexes and returns matches ranked by weight.
    ///
    /// Matches with equal weight keep the order in which their keys were
    /// first found.
    pub fn search(&self, query: &str) -> Result<Vec<MatchedEntry<S::Key>>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::BlankQuery);
        }

        let segment = self.analyzer.parse(query);
        let mut matches = self.translator.evaluate(&segment)?;
        matches.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        if self.limit > 0 {
            matches.truncate(self.limit);
        }

        debug!(target: "sift::querier", query, results = matches.len(), "search complete");
        Ok(matches)
    }
}

/// Builds a querier configured from [`Settings`].
pub fn from_settings<S, P>(standard: S, precise: P, settings: &Settings) -> Querier<S, P, CombinerKind>
where
    S: TokenIndex,
    P: TokenIndex<Key = S::Key, Equality = S::Equality>,
{
    Querier::new(standard, precise, combiner_kind(settings.translator.combiner))
        .with_cache(settings.translator.cache)
        .with_limit(settings.search.limit)
}

/// Maps a configured combiner name to the built-in combiner.
fn combiner_kind(name: CombinerName) -> CombinerKind {
    match name {
        CombinerName::Sum => CombinerKind::Sum,
        CombinerName::Max => CombinerKind::Max,
        CombinerName::Mean => CombinerKind::Mean,
    }
}
