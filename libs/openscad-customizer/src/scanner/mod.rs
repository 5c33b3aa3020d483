//! # Line Scanner
//!
//! Low-level text helpers shared by segmentation and extraction:
//! line-ending normalisation, line iteration with byte spans, and
//! lookup of the line preceding a given offset.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::scanner::{lines, normalize_line_endings};
//!
//! let text = normalize_line_endings("a = 1;\r\nb = 2;");
//! let collected: Vec<&str> = lines(&text).map(|(_, line)| line).collect();
//! assert_eq!(collected, vec!["a = 1;", "b = 2;"]);
//! ```

mod cursor;

pub use cursor::Cursor;

use crate::span::Span;
use std::borrow::Cow;

// =============================================================================
// LINE ENDINGS
// =============================================================================

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
///
/// Borrows the input unchanged when it contains no carriage return.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::scanner::normalize_line_endings;
///
/// assert_eq!(normalize_line_endings("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    if !source.contains('\r') {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
}

// =============================================================================
// LINES
// =============================================================================

/// Iterate over the lines of `source` with their byte spans.
///
/// Spans exclude the `\n` terminator. A trailing newline does not produce an
/// extra empty line.
pub fn lines(source: &str) -> impl Iterator<Item = (Span, &str)> + '_ {
    let mut offset = 0;
    source.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        (Span::new(start, start + line.len()), line)
    })
}

/// Return the line immediately before the line that starts at `line_start`.
///
/// Returns `None` for the first line of the text.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::scanner::preceding_line;
///
/// let source = "// Width\nwidth = 10;";
/// assert_eq!(preceding_line(source, 9), Some("// Width"));
/// assert_eq!(preceding_line(source, 0), None);
/// ```
pub fn preceding_line(source: &str, line_start: usize) -> Option<&str> {
    let before = source.get(..line_start)?.strip_suffix('\n')?;
    let start = before.rfind('\n').map_or(0, |i| i + 1);
    Some(&before[start..])
}

/// Characters allowed in an assignable identifier (including `$` specials).
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whitespace that does not end a line.
pub fn is_inline_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000B}' | '\u{000C}')
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_borrows_unix_text() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_old_mac_endings() {
        assert_eq!(normalize_line_endings("a\rb\r"), "a\nb\n");
    }

    #[test]
    fn test_lines_spans() {
        let source = "ab\n\ncd\n";
        let collected: Vec<(Span, &str)> = lines(source).collect();
        assert_eq!(
            collected,
            vec![
                (Span::new(0, 2), "ab"),
                (Span::new(3, 3), ""),
                (Span::new(4, 6), "cd"),
            ]
        );
    }

    #[test]
    fn test_lines_empty_source() {
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_preceding_line_blank() {
        let source = "// a\n\nx = 1;";
        assert_eq!(preceding_line(source, 6), Some(""));
    }

    #[test]
    fn test_preceding_line_mid_line_offset() {
        // Offset 2 is not preceded by a newline
        assert_eq!(preceding_line("x = 1;", 2), None);
    }

    #[test]
    fn test_identifier_chars() {
        assert!("$fn".chars().all(is_identifier_char));
        assert!("width_2".chars().all(is_identifier_char));
        assert!(!is_identifier_char('-'));
    }
}
