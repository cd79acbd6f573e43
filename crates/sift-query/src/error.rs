//! Error types for query parsing.

use thiserror::Error;

/// Errors raised while configuring the query parser.
///
/// Parsing itself is total: malformed search strings produce a best-effort
/// segment tree rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The escape character was listed as a terminator.
    #[error("the escape character '\\' cannot be a terminator")]
    EscapeInTerminators,
}
