//! # Character Cursor
//!
//! Peekable character cursor for the assignment scanner.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::scanner::Cursor;
//!
//! let mut cursor = Cursor::new("hello");
//! assert_eq!(cursor.peek(), Some('h'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('e'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// Cursors are cheap to clone, which is how the scanner attempts a match
/// speculatively and discards it on failure.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, Position::default())
    }

    /// Create a cursor resuming at a known position.
    ///
    /// ## Parameters
    ///
    /// - `source`: Source text to iterate over
    /// - `position`: Position previously reported by a cursor over the same text
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::scanner::Cursor;
    /// use openscad_customizer::Position;
    ///
    /// let cursor = Cursor::at("a\nb", Position::new(2, 1, 0));
    /// assert_eq!(cursor.peek(), Some('b'));
    /// ```
    pub fn at(source: &'a str, position: Position) -> Self {
        Self {
            source,
            byte: position.byte.min(source.len()),
            line: position.line,
            column: position.column,
        }
    }

    /// Get current position.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of file.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Check if the cursor sits at the first character of a line.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::scanner::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert!(cursor.at_line_start());
    /// cursor.advance();
    /// assert!(!cursor.at_line_start());
    /// cursor.advance();
    /// assert!(cursor.at_line_start());
    /// ```
    pub fn at_line_start(&self) -> bool {
        self.byte == 0 || self.source[..self.byte].ends_with('\n')
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Check if the remaining text starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.byte..].starts_with(prefix)
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consume `expected` if it is the current character.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::scanner::Cursor;
    ///
    /// let mut cursor = Cursor::new("=1");
    /// assert!(!cursor.eat(';'));
    /// assert!(cursor.eat('='));
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while predicate is true.
    ///
    /// ## Returns
    ///
    /// The text that was consumed.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.byte]
    }

    /// Advance past the end of the current line, including its terminator.
    pub fn skip_line(&mut self) {
        self.advance_while(|c| c != '\n');
        self.advance();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new("hello");
        assert_eq!(cursor.position().byte, 0);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.position().byte, 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_newline() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        assert_eq!(cursor.position().line, 0);
        cursor.advance();
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_cursor_advance_while_returns_consumed_text() {
        let mut cursor = Cursor::new("abc123");
        assert_eq!(cursor.advance_while(|c| c.is_alphabetic()), "abc");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.position().byte, 3);
    }

    #[test]
    fn test_cursor_skip_line() {
        let mut cursor = Cursor::new("first\nsecond");
        cursor.skip_line();
        assert_eq!(cursor.position(), Position::new(6, 1, 0));
        cursor.skip_line();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_at_clamps_to_source() {
        let cursor = Cursor::at("ab", Position::new(10, 0, 10));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte, 2);
    }
}
