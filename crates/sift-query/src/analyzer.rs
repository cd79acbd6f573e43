//! Structural analyzer.
//!
//! Parses a search string into a segment tree using recursive descent over an
//! immutable [`Cursor`].
//!
//! # Grammar
//!
//! ```text
//! sequence → (WS* segment)* WS*
//! segment  → "+" segment | "-" segment | quoted | group | value
//! quoted   → '"' CONTENT '"'?
//! group    → "(" sequence ")"?
//! value    → CONTENT
//! ```
//!
//! A backslash escapes the following character wherever content is read, so
//! `\(`, `\"` and `\+` are literal. Unclosed quotes and brackets end at the
//! end of input; the analyzer never fails.

use crate::{
    cursor::Cursor,
    scanner::{ContentScanner, Terminators},
    segment::Segment,
};

/// Marks the following segment as compulsory.
const COMPULSORY: char = '+';
/// Marks the following segment as excluding.
const EXCLUDING: char = '-';
/// Opens and closes a precise section.
const QUOTE: char = '"';
/// Opens a group.
const GROUP_OPEN: char = '(';
/// Closes a group.
const GROUP_CLOSE: char = ')';

/// Recursive descent parser for search strings.
#[derive(Debug, Clone)]
pub struct Analyzer {
    /// Scanner for bare value runs.
    values: ContentScanner,
    /// Scanner for the body of quoted sections.
    quoted: ContentScanner,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with the standard structural markers.
    pub fn new() -> Self {
        Self {
            values: ContentScanner::new(Terminators::value()),
            quoted: ContentScanner::new(Terminators::quote()),
        }
    }

    /// Parses a search string into a segment tree.
    ///
    /// Empty or whitespace-only input yields [`Segment::NoMatch`].
    pub fn parse(&self, input: &str) -> Segment {
        let (segment, _) = self.parse_sequence(Cursor::new(input), false);
        segment
    }

    /// Parses sibling segments until end of input.
    ///
    /// Inside a group (`nested`) the sequence also stops in front of a `)`,
    /// which is left for the caller. At top level an unmatched `)` is skipped.
    fn parse_sequence<'a>(&self, cursor: Cursor<'a>, nested: bool) -> (Segment, Cursor<'a>) {
        let mut children = Vec::new();
        let mut cursor = cursor.skip_whitespace();

        while let Some(ch) = cursor.current() {
            if ch == GROUP_CLOSE {
                if nested {
                    break;
                }
                cursor = cursor.advance().skip_whitespace();
                continue;
            }
            let (segment, next) = self.parse_segment(cursor);
            children.push(segment);
            cursor = next.skip_whitespace();
        }

        (Segment::group(children), cursor)
    }

    /// Parses a single segment starting at `cursor`.
    fn parse_segment<'a>(&self, cursor: Cursor<'a>) -> (Segment, Cursor<'a>) {
        match cursor.current() {
            Some(COMPULSORY) => {
                let (inner, next) = self.parse_prefixed(cursor.advance());
                (Segment::compulsory(inner), next)
            }
            Some(EXCLUDING) => {
                let (inner, next) = self.parse_prefixed(cursor.advance());
                (Segment::excluding(inner), next)
            }
            Some(QUOTE) => self.parse_quoted(cursor.advance()),
            Some(GROUP_OPEN) => self.parse_group(cursor.advance()),
            _ => self.values.scan(cursor, Segment::standard),
        }
    }

    /// Parses the operand of a `+` or `-` prefix.
    ///
    /// A prefix followed by whitespace, a close bracket or end of input has
    /// no operand.
    fn parse_prefixed<'a>(&self, cursor: Cursor<'a>) -> (Segment, Cursor<'a>) {
        match cursor.current() {
            Some(ch) if ch.is_whitespace() || ch == GROUP_CLOSE => (Segment::NoMatch, cursor),
            None => (Segment::NoMatch, cursor),
            Some(_) => self.parse_segment(cursor),
        }
    }

    /// Parses the body of a quoted section, consuming the closing quote.
    fn parse_quoted<'a>(&self, cursor: Cursor<'a>) -> (Segment, Cursor<'a>) {
        let (segment, next) = self.quoted.scan(cursor, Segment::precise);
        match next.current() {
            Some(QUOTE) => (segment, next.advance()),
            _ => (segment, next),
        }
    }

    /// Parses the body of a bracketed group, consuming the close bracket.
    fn parse_group<'a>(&self, cursor: Cursor<'a>) -> (Segment, Cursor<'a>) {
        let (segment, next) = self.parse_sequence(cursor, true);
        match next.current() {
            Some(GROUP_CLOSE) => (segment, next.advance()),
            _ => (segment, next),
        }
    }
}

/// Parses a search string with a default [`Analyzer`].
pub fn parse(input: &str) -> Segment {
    Analyzer::new().parse(input)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn val(s: &str) -> Segment {
        Segment::StandardValue(s.into())
    }

    fn exact(s: &str) -> Segment {
        Segment::PreciseValue(s.into())
    }

    fn group(children: Vec<Segment>) -> Segment {
        Segment::Group(children)
    }

    fn must(s: Segment) -> Segment {
        Segment::Compulsory(Box::new(s))
    }

    fn not(s: Segment) -> Segment {
        Segment::Excluding(Box::new(s))
    }

    #[test]
    fn empty_query() {
        assert_eq!(parse(""), Segment::NoMatch);
        assert_eq!(parse("   \t\n"), Segment::NoMatch);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse(" test "), val("test"));
    }

    #[test]
    fn multiple_values_group() {
        assert_eq!(
            parse("rust  async\tawait"),
            group(vec![val("rust"), val("async"), val("await")])
        );
    }

    #[test]
    fn quoted_preserves_whitespace() {
        assert_eq!(parse("\"test test\""), exact("test test"));
    }

    #[test]
    fn escaped_quote_inside_quotes() {
        assert_eq!(parse("\"test\\\"test\""), exact("test\"test"));
    }

    #[test]
    fn empty_quotes_are_no_match() {
        assert_eq!(parse("\"\""), Segment::NoMatch);
        assert_eq!(parse("a \"  \" b"), group(vec![val("a"), val("b")]));
    }

    #[test]
    fn unclosed_quote_runs_to_end() {
        assert_eq!(parse("a \"b c"), group(vec![val("a"), exact("b c")]));
    }

    #[test]
    fn quote_adjacent_to_value() {
        assert_eq!(
            parse("a\"b c\"d"),
            group(vec![val("a"), exact("b c"), val("d")])
        );
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            parse("test0 (test1 (test2 test3)) test4"),
            group(vec![
                val("test0"),
                group(vec![val("test1"), group(vec![val("test2"), val("test3")])]),
                val("test4"),
            ])
        );
    }

    #[test]
    fn group_without_leading_whitespace() {
        assert_eq!(
            parse("test0(test1 test2)"),
            group(vec![val("test0"), group(vec![val("test1"), val("test2")])])
        );
    }

    #[test]
    fn escaped_brackets_are_literal() {
        assert_eq!(
            parse("test0\\(test1 test2\\)"),
            group(vec![val("test0(test1"), val("test2)")])
        );
    }

    #[test]
    fn single_child_group_unwraps() {
        assert_eq!(parse("(a)"), val("a"));
        assert_eq!(parse("((a b))"), group(vec![val("a"), val("b")]));
        assert_eq!(parse("x (a)"), group(vec![val("x"), val("a")]));
    }

    #[test]
    fn empty_group_is_no_match() {
        assert_eq!(parse("()"), Segment::NoMatch);
        assert_eq!(parse("a ( ) b"), group(vec![val("a"), val("b")]));
    }

    #[test]
    fn unclosed_group_runs_to_end() {
        assert_eq!(
            parse("a (b c"),
            group(vec![val("a"), group(vec![val("b"), val("c")])])
        );
    }

    #[test]
    fn stray_close_bracket_is_skipped() {
        assert_eq!(parse("a) b"), group(vec![val("a"), val("b")]));
        assert_eq!(parse(")"), Segment::NoMatch);
    }

    #[test]
    fn compulsory_quoted() {
        assert_eq!(parse("+\"test0 test1\""), must(exact("test0 test1")));
    }

    #[test]
    fn compulsory_value_and_group() {
        assert_eq!(
            parse("a +b +(c d)"),
            group(vec![
                val("a"),
                must(val("b")),
                must(group(vec![val("c"), val("d")])),
            ])
        );
    }

    #[test]
    fn excluding_prefix() {
        assert_eq!(
            parse("rust -deprecated"),
            group(vec![val("rust"), not(val("deprecated"))])
        );
        assert_eq!(parse("-\"a b\""), not(exact("a b")));
    }

    #[test]
    fn prefix_without_operand() {
        assert_eq!(parse("+"), Segment::NoMatch);
        assert_eq!(parse("a + b"), group(vec![val("a"), val("b")]));
        assert_eq!(parse("(a -)"), val("a"));
    }

    #[test]
    fn prefix_inside_value_is_content() {
        assert_eq!(parse("well-known c++"), group(vec![val("well-known"), val("c++")]));
    }

    #[test]
    fn escaped_prefix_is_content() {
        assert_eq!(parse("\\+a \\-b"), group(vec![val("+a"), val("-b")]));
    }

    #[test]
    fn escaped_whitespace_joins_values() {
        assert_eq!(parse("a\\ b"), val("a b"));
    }

    #[test]
    fn stacked_prefixes() {
        assert_eq!(parse("+-a"), must(not(val("a"))));
    }

    #[test]
    fn deep_nesting() {
        let input = format!("{}x{}", "(".repeat(64), ")".repeat(64));
        assert_eq!(parse(&input), val("x"));
    }

    #[test]
    fn query_string_round_trip() {
        let queries = [
            "a b",
            "+\"test0 test1\"",
            "test0 (test1 (test2 test3)) test4",
            "test0\\(test1 test2\\)",
            "-(a b) +c \"d \\\" e\"",
            "\\+a \\-b \\\\c",
        ];
        for query in queries {
            let tree = parse(query);
            assert_eq!(parse(&tree.to_query_string()), tree, "query: {query}");
        }
    }

    #[test]
    fn performance_many_queries() {
        let queries = [
            "rust",
            "rust async await",
            "\"error handling\"",
            "+rust -deprecated",
            "test0 (test1 (test2 test3)) test4",
            "a\\(b \"c \\\" d\" (e +(f g))",
        ];

        let analyzer = Analyzer::new();
        let start = Instant::now();
        for _ in 0..1000 {
            for query in &queries {
                let _ = analyzer.parse(query);
            }
        }
        let elapsed = start.elapsed();

        assert!(
            elapsed.as_millis() < 1000,
            "Parsing 6,000 queries took {elapsed:?}, expected < 1s"
        );
    }
}
