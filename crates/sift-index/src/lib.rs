//! Query evaluation against token indexes for sift.
//!
//! A [`Translator`] walks a [`Segment`](sift_query::Segment) tree and
//! consults two [`TokenIndex`] collaborators: a standard index for plain
//! values and a precise index for quoted values. Results from sibling
//! segments are unioned, filtered by compulsory and excluding segments, and
//! merged per key with a [`MatchCombiner`].
//!
//! # Example
//!
//! ```
//! use sift_index::{MatchedEntry, MemoryIndex, SourceLocation, SumCombiner, Translator};
//!
//! let mut standard = MemoryIndex::lowercase();
//! standard.insert("rust", MatchedEntry::new(1, 1.0, vec![SourceLocation::new(0, 0, 0, 4)]));
//! let precise = MemoryIndex::new();
//!
//! let translator = Translator::new(standard, precise, SumCombiner);
//! let matches = translator.evaluate(&sift_query::parse("Rust")).unwrap();
//! assert_eq!(matches[0].key, 1);
//! ```

#![warn(missing_docs)]

mod cache;
mod combiner;
mod entry;
mod equality;
mod error;
mod index;
mod memory;
mod translator;

pub use cache::ResultCache;
pub use combiner::{CombinerKind, MatchCombiner, MaxCombiner, MeanCombiner, SumCombiner};
pub use entry::{MatchedEntry, SourceLocation};
pub use equality::{AsciiCaseInsensitive, DefaultEquality, KeyEquality};
pub use error::{IndexError, TranslateError};
pub use index::TokenIndex;
pub use memory::{MemoryIndex, Normalizer};
pub use translator::Translator;
