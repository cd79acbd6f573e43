//! Plain-content scanner.
//!
//! Consumes a run of non-structural characters, honouring backslash escapes,
//! and stops in front of the first unescaped terminator.

use crate::{cursor::Cursor, error::QueryError, segment::Segment};

/// The escape character. Never valid as a terminator.
pub const ESCAPE: char = '\\';

/// A set of characters that end a content run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminators {
    /// Explicit terminating characters.
    chars: Vec<char>,
    /// Whether any whitespace character also terminates.
    whitespace: bool,
}

impl Terminators {
    /// Creates a terminator set.
    ///
    /// Fails if `chars` contains the escape character.
    pub fn new(chars: impl IntoIterator<Item = char>, whitespace: bool) -> Result<Self, QueryError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.contains(&ESCAPE) {
            return Err(QueryError::EscapeInTerminators);
        }
        Ok(Self { chars, whitespace })
    }

    /// Terminators for bare value runs: whitespace, quotes and brackets.
    pub fn value() -> Self {
        Self {
            chars: vec!['"', '(', ')'],
            whitespace: true,
        }
    }

    /// Terminators inside a quoted section: only the closing quote.
    pub fn quote() -> Self {
        Self {
            chars: vec!['"'],
            whitespace: false,
        }
    }

    /// Returns true if `ch` ends a content run.
    pub fn contains(&self, ch: char) -> bool {
        (self.whitespace && ch.is_whitespace()) || self.chars.contains(&ch)
    }
}

/// Scans plain content up to a terminator.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    /// Characters that stop the scan when unescaped.
    terminators: Terminators,
}

impl ContentScanner {
    /// Creates a scanner for the given terminators.
    pub fn new(terminators: Terminators) -> Self {
        Self { terminators }
    }

    /// Scans from `cursor` and converts the collected text with `make`.
    ///
    /// Returns the segment and a cursor resting on the terminator (which is
    /// not consumed) or at end of input. An empty run yields `NoMatch` and
    /// `make` is not called.
    pub fn scan<'a, F>(&self, cursor: Cursor<'a>, make: F) -> (Segment, Cursor<'a>)
    where
        F: FnOnce(String) -> Segment,
    {
        let mut buffer = String::new();
        let mut escape_next = false;
        let mut cursor = cursor;

        while let Some(ch) = cursor.current() {
            if escape_next {
                buffer.push(ch);
                escape_next = false;
            } else if ch == ESCAPE {
                escape_next = true;
            } else if self.terminators.contains(ch) {
                break;
            } else {
                buffer.push(ch);
            }
            cursor = cursor.advance();
        }

        if buffer.is_empty() {
            (Segment::NoMatch, cursor)
        } else {
            (make(buffer), cursor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_value(input: &str) -> (Segment, usize) {
        let scanner = ContentScanner::new(Terminators::value());
        let (segment, cursor) = scanner.scan(Cursor::new(input), Segment::standard);
        (segment, cursor.offset())
    }

    #[test]
    fn rejects_escape_terminator() {
        assert_eq!(
            Terminators::new(['a', '\\'], false),
            Err(QueryError::EscapeInTerminators)
        );
        assert!(Terminators::new(['a', ')'], true).is_ok());
    }

    #[test]
    fn stops_before_terminator() {
        let (segment, offset) = scan_value("rust async");
        assert_eq!(segment, Segment::StandardValue("rust".into()));
        assert_eq!(offset, 4);
    }

    #[test]
    fn runs_to_end_of_input() {
        let (segment, offset) = scan_value("rust");
        assert_eq!(segment, Segment::StandardValue("rust".into()));
        assert_eq!(offset, 4);
    }

    #[test]
    fn empty_run_is_no_match() {
        let (segment, offset) = scan_value("(rust)");
        assert_eq!(segment, Segment::NoMatch);
        assert_eq!(offset, 0);
    }

    #[test]
    fn escaped_terminator_is_content() {
        let (segment, _) = scan_value("a\\(b\\ c d");
        assert_eq!(segment, Segment::StandardValue("a(b c".into()));
    }

    #[test]
    fn escaped_escape_is_content() {
        let (segment, _) = scan_value("a\\\\b");
        assert_eq!(segment, Segment::StandardValue("a\\b".into()));
    }

    #[test]
    fn trailing_escape_is_dropped() {
        let (segment, offset) = scan_value("ab\\");
        assert_eq!(segment, Segment::StandardValue("ab".into()));
        assert_eq!(offset, 3);
    }

    #[test]
    fn quote_terminators_keep_whitespace() {
        let scanner = ContentScanner::new(Terminators::quote());
        let (segment, cursor) = scanner.scan(Cursor::new("a (b)\" c"), Segment::precise);
        assert_eq!(segment, Segment::PreciseValue("a (b)".into()));
        assert_eq!(cursor.current(), Some('"'));
    }

    #[test]
    fn custom_terminators() {
        let terminators = Terminators::new([','], false).unwrap();
        let scanner = ContentScanner::new(terminators);
        let (segment, cursor) = scanner.scan(Cursor::new("a b,c"), Segment::standard);
        assert_eq!(segment, Segment::StandardValue("a b".into()));
        assert_eq!(cursor.current(), Some(','));
    }
}
