//! Query layer for full-text search.
//!
//! sift turns a human-typed search string into a tree of query segments and
//! evaluates it against two token indexes: a lenient *standard* index for
//! plain values and an exact *precise* index for quoted values.
//!
//! ```text
//! rust +"error handling" -(deprecated legacy)
//! ```
//!
//! matches keys found by `rust` or by the exact phrase `error handling`,
//! keeps only keys the phrase matched, and drops keys matching `deprecated`
//! or `legacy`.
//!
//! # Example
//!
//! ```
//! use sift::{MatchedEntry, MemoryIndex, Querier, SourceLocation, SumCombiner};
//!
//! let mut standard = MemoryIndex::lowercase();
//! let location = SourceLocation::new(0, 0, 0, 4);
//! standard.insert("rust", MatchedEntry::new("guide.md", 1.0, vec![location]));
//! standard.insert("legacy", MatchedEntry::new("old.md", 1.0, vec![location]));
//! standard.insert("rust", MatchedEntry::new("old.md", 1.0, vec![location]));
//!
//! let querier = Querier::new(standard, MemoryIndex::new(), SumCombiner);
//! let matches = querier.search("Rust -legacy").unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].key, "guide.md");
//! ```

#![warn(missing_docs)]

mod error;
mod querier;

pub use error::SearchError;
pub use querier::{Querier, from_settings};
pub use sift_config::{CombinerName, ConfigError, SETTINGS_FILENAME, Settings};
pub use sift_index::{
    AsciiCaseInsensitive, CombinerKind, DefaultEquality, IndexError, KeyEquality, MatchCombiner,
    MatchedEntry, MaxCombiner, MeanCombiner, MemoryIndex, SourceLocation, SumCombiner, TokenIndex,
    TranslateError, Translator,
};
pub use sift_query::{Analyzer, Segment, parse};
