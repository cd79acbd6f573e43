//! Data structures returned by index lookups and query evaluation.

/// Where a matched token occurred in the indexed content.
///
/// The translator never inspects locations; it only carries them through and
/// concatenates them when matches for the same key are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Index of the content source (e.g. a field) the token came from.
    pub source: usize,
    /// Position of the token within the source's token stream.
    pub token_index: usize,
    /// Byte offset of the token within the source.
    pub offset: usize,
    /// Length of the token in bytes.
    pub length: usize,
}

impl SourceLocation {
    /// Creates a source location.
    pub fn new(source: usize, token_index: usize, offset: usize, length: usize) -> Self {
        Self {
            source,
            token_index,
            offset,
            length,
        }
    }
}

/// A key matched by a lookup or query, with its weight and provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedEntry<K> {
    /// The matched key.
    pub key: K,
    /// Relevance weight, always positive.
    pub weight: f32,
    /// Where the match occurred. Never empty.
    pub locations: Vec<SourceLocation>,
}

impl<K> MatchedEntry<K> {
    /// Creates a matched entry.
    pub fn new(key: K, weight: f32, locations: Vec<SourceLocation>) -> Self {
        Self {
            key,
            weight,
            locations,
        }
    }
}
