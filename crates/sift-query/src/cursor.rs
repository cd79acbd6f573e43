//! Forward-only character cursor over a search string.

/// An immutable position within a search string.
///
/// Advancing produces a new cursor and leaves the original untouched, so a
/// saved cursor can always be resumed from after a nested parse returns.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// The original input string.
    input: &'a str,
    /// Byte offset of the current character.
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Returns a cursor one character further along.
    ///
    /// Advancing at end of input returns a cursor that is still at the end.
    #[must_use]
    pub fn advance(&self) -> Self {
        match self.current() {
            Some(ch) => Self {
                input: self.input,
                offset: self.offset + ch.len_utf8(),
            },
            None => *self,
        }
    }

    /// Byte offset of the cursor within the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Returns a cursor past any whitespace at the current position.
    #[must_use]
    pub fn skip_whitespace(&self) -> Self {
        let mut cursor = *self;
        while cursor.current().is_some_and(char::is_whitespace) {
            cursor = cursor.advance();
        }
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_characters_in_order() {
        let start = Cursor::new("ab");
        assert_eq!(start.current(), Some('a'));
        let next = start.advance();
        assert_eq!(next.current(), Some('b'));
        assert_eq!(next.advance().current(), None);
    }

    #[test]
    fn advance_does_not_mutate_original() {
        let start = Cursor::new("xyz");
        let _ = start.advance().advance();
        assert_eq!(start.current(), Some('x'));
        assert_eq!(start.offset(), 0);
    }

    #[test]
    fn advance_past_end_is_idempotent() {
        let end = Cursor::new("a").advance();
        assert!(end.is_at_end());
        let beyond = end.advance().advance();
        assert_eq!(beyond.current(), None);
        assert_eq!(beyond.offset(), 1);
    }

    #[test]
    fn empty_input_is_at_end() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn multibyte_characters() {
        let cursor = Cursor::new("é€x").advance().advance();
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.offset(), "é€".len());
    }

    #[test]
    fn skips_whitespace() {
        let cursor = Cursor::new(" \t\n a").skip_whitespace();
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(Cursor::new("a").skip_whitespace().offset(), 0);
    }
}
