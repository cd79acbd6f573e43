//! Query segment tree.
//!
//! Represents a parsed search string before it is evaluated against token indexes.

use std::fmt;

/// One node of a parsed query.
///
/// Segments are built once by the analyzer and never modified afterwards.
/// Prefer the constructor functions over building variants directly: they
/// keep the tree free of blank values and degenerate groups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Segment {
    /// Parsing produced nothing usable.
    NoMatch,

    /// Text matched against the lenient, normalized index.
    StandardValue(String),

    /// Text matched against the exact index.
    PreciseValue(String),

    /// Sibling segments combined with OR semantics.
    Group(Vec<Self>),

    /// Results of the enclosing group must also be matched by this segment.
    Compulsory(Box<Self>),

    /// Results matched by this segment are removed from the enclosing group.
    Excluding(Box<Self>),
}

impl Segment {
    /// Creates a standard value, or `NoMatch` if the text is blank.
    pub fn standard(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::NoMatch
        } else {
            Self::StandardValue(text)
        }
    }

    /// Creates a precise value, or `NoMatch` if the text is blank.
    pub fn precise(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::NoMatch
        } else {
            Self::PreciseValue(text)
        }
    }

    /// Creates a group from sibling segments.
    ///
    /// `NoMatch` children are dropped. No remaining children yields `NoMatch`
    /// and a single remaining child is returned unwrapped.
    pub fn group(children: Vec<Self>) -> Self {
        let mut children: Vec<Self> = children
            .into_iter()
            .filter(|child| !child.is_no_match())
            .collect();

        match children.len() {
            0 => Self::NoMatch,
            1 => children.pop().unwrap_or(Self::NoMatch),
            _ => Self::Group(children),
        }
    }

    /// Wraps a segment as compulsory. `NoMatch` stays `NoMatch`.
    pub fn compulsory(inner: Self) -> Self {
        if inner.is_no_match() {
            Self::NoMatch
        } else {
            Self::Compulsory(Box::new(inner))
        }
    }

    /// Wraps a segment as excluding. `NoMatch` stays `NoMatch`.
    pub fn excluding(inner: Self) -> Self {
        if inner.is_no_match() {
            Self::NoMatch
        } else {
            Self::Excluding(Box::new(inner))
        }
    }

    /// Returns true for `NoMatch`.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Short human-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoMatch => "no match",
            Self::StandardValue(_) => "standard value",
            Self::PreciseValue(_) => "precise value",
            Self::Group(_) => "group",
            Self::Compulsory(_) => "compulsory",
            Self::Excluding(_) => "excluding",
        }
    }

    /// Number of groups enclosing the deepest value in this tree.
    ///
    /// Values and `NoMatch` have depth 0; modifiers do not add depth.
    pub fn depth(&self) -> usize {
        match self {
            Self::NoMatch | Self::StandardValue(_) | Self::PreciseValue(_) => 0,
            Self::Group(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
            Self::Compulsory(inner) | Self::Excluding(inner) => inner.depth(),
        }
    }

    /// Formats the segment as the search string that parses back to it.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        self.write_query_string(&mut out, false);
        out
    }

    /// Appends the query string form, bracketing groups when `nested`.
    fn write_query_string(&self, out: &mut String, nested: bool) {
        match self {
            Self::NoMatch => {}
            Self::StandardValue(text) => escape_standard(text, out),
            Self::PreciseValue(text) => {
                out.push('"');
                escape_precise(text, out);
                out.push('"');
            }
            Self::Group(children) => {
                if nested {
                    out.push('(');
                }
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    child.write_query_string(out, true);
                }
                if nested {
                    out.push(')');
                }
            }
            Self::Compulsory(inner) => {
                out.push('+');
                inner.write_query_string(out, true);
            }
            Self::Excluding(inner) => {
                out.push('-');
                inner.write_query_string(out, true);
            }
        }
    }

    /// Formats the segment as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::NoMatch => writeln!(f, "{prefix}NoMatch"),
            Self::StandardValue(s) => writeln!(f, "{prefix}StandardValue({s:?})"),
            Self::PreciseValue(s) => writeln!(f, "{prefix}PreciseValue({s:?})"),
            Self::Group(children) => {
                writeln!(f, "{prefix}Group")?;
                for child in children {
                    child.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
            Self::Compulsory(inner) => {
                writeln!(f, "{prefix}Compulsory")?;
                inner.fmt_tree(f, indent + 1)
            }
            Self::Excluding(inner) => {
                writeln!(f, "{prefix}Excluding")?;
                inner.fmt_tree(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Escapes a standard value so every character reads back as content.
fn escape_standard(text: &str, out: &mut String) {
    for (i, ch) in text.chars().enumerate() {
        let structural = matches!(ch, '\\' | '"' | '(' | ')') || ch.is_whitespace();
        let prefix = i == 0 && matches!(ch, '+' | '-');
        if structural || prefix {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Escapes the body of a quoted precise value.
fn escape_precise(text: &str, out: &mut String) {
    for ch in text.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
}
