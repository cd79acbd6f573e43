//! The token index collaborator interface.

use std::sync::Arc;

use crate::{entry::MatchedEntry, equality::KeyEquality, error::IndexError};

/// A token index that maps normalized terms to weighted key matches.
///
/// Implementations are expected to be safe for concurrent read-only use when
/// shared between threads.
pub trait TokenIndex {
    /// Key type identifying a match (e.g. a document id).
    type Key: Clone;

    /// Policy deciding when two keys are the same.
    type Equality: KeyEquality<Self::Key>;

    /// Returns every match for `term`.
    ///
    /// Returns an empty list when nothing matches and
    /// [`IndexError::BlankTerm`] for blank input.
    fn get_matches(&self, term: &str) -> Result<Vec<MatchedEntry<Self::Key>>, IndexError>;

    /// Returns the key equality policy of this index.
    fn key_equality(&self) -> &Self::Equality;
}

impl<T: TokenIndex + ?Sized> TokenIndex for &T {
    type Key = T::Key;
    type Equality = T::Equality;

    fn get_matches(&self, term: &str) -> Result<Vec<MatchedEntry<Self::Key>>, IndexError> {
        (**self).get_matches(term)
    }

    fn key_equality(&self) -> &Self::Equality {
        (**self).key_equality()
    }
}

impl<T: TokenIndex + ?Sized> TokenIndex for Arc<T> {
    type Key = T::Key;
    type Equality = T::Equality;

    fn get_matches(&self, term: &str) -> Result<Vec<MatchedEntry<Self::Key>>, IndexError> {
        (**self).get_matches(term)
    }

    fn key_equality(&self) -> &Self::Equality {
        (**self).key_equality()
    }
}
