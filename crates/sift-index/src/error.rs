//! Error types for the sift-index crate.

use thiserror::Error;

/// Errors reported by a token index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The lookup term was empty or whitespace.
    #[error("cannot look up a blank term")]
    BlankTerm,

    /// The index backend failed to answer a lookup.
    #[error("index lookup failed for {term:?}: {message}")]
    Lookup {
        /// The term being looked up.
        term: String,
        /// Error message from the backend.
        message: String,
    },
}

/// Errors that can occur while evaluating a segment tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// The translator does not know how to evaluate this segment.
    #[error("unsupported segment: {kind}")]
    UnsupportedSegment {
        /// Name of the segment variant.
        kind: &'static str,
    },

    /// The match combiner returned a weight that is not finite and positive.
    #[error("match combiner produced invalid weight {weight}")]
    InvalidWeight {
        /// The rejected weight.
        weight: f32,
    },

    /// A token index lookup failed.
    #[error(transparent)]
    Index(#[from] IndexError),
}
