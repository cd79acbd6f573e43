//! Error types for the search facade.

use sift_index::TranslateError;
use thiserror::Error;

/// Errors returned by [`Querier::search`](crate::Querier::search).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The search string was empty or whitespace.
    #[error("search string is blank")]
    BlankQuery,

    /// Evaluating the parsed query failed.
    #[error("query evaluation failed: {0}")]
    Translate(#[from] TranslateError),
}
