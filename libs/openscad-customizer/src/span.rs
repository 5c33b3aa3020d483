//! # Source Span
//!
//! Byte ranges into a script, used to locate sections and assignments
//! without re-searching the text.
//!
//! ## Usage
//!
//! ```rust
//! use openscad_customizer::Span;
//!
//! let span = Span::new(0, 5);
//! assert_eq!(span.slice("width = 10;"), "width");
//! ```

/// A range in the source code, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use openscad_customizer::Span;
    ///
    /// let span = Span::new(5, 15);
    /// assert_eq!(span.start(), 5);
    /// assert_eq!(span.end(), 15);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the text covered by this span, or an empty string when the
    /// span does not fall on character boundaries of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// A location in the source: byte offset plus 0-indexed line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the text.
    pub byte: usize,
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(10, 5).is_empty()); // Invalid span is empty
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_span_slice() {
        let source = "size = 4;";
        assert_eq!(Span::new(0, 4).slice(source), "size");
        assert_eq!(Span::new(7, 8).slice(source), "4");
    }

    #[test]
    fn test_span_slice_out_of_bounds_is_empty() {
        assert_eq!(Span::new(3, 40).slice("abc"), "");
        // Splits the two-byte 'é'
        assert_eq!(Span::new(0, 1).slice("é"), "");
    }
}
