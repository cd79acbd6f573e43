//! Search string parsing for sift.
//!
//! This crate turns a human-typed search string into a tree of [`Segment`]s:
//!
//! - **Values**: `rust` - matched against the lenient, normalized index
//! - **Quoted**: `"error handling"` - matched exactly, whitespace preserved
//! - **Groups**: `(a b)` - nested alternatives
//! - **Compulsory**: `+rust` - results must also match this segment
//! - **Excluding**: `-deprecated` - results matching this segment are removed
//! - **Escapes**: `\(`, `\"`, `\+` - structural characters taken literally
//!
//! Parsing is total: every input produces a segment tree, possibly
//! [`Segment::NoMatch`].
//!
//! # Example
//!
//! ```
//! use sift_query::{Segment, parse};
//!
//! let segment = parse("+\"error handling\" rust");
//! assert!(matches!(segment, Segment::Group(_)));
//! ```

#![warn(missing_docs)]

mod analyzer;
mod cursor;
mod error;
mod scanner;
mod segment;

pub use analyzer::{Analyzer, parse};
pub use cursor::Cursor;
pub use error::QueryError;
pub use scanner::{ContentScanner, ESCAPE, Terminators};
pub use segment::Segment;
