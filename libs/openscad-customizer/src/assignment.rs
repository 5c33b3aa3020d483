//! # Assignment Scanner
//!
//! Finds top-level assignments of the shape
//!
//! ```text
//! identifier = expression ;   // optional trailing comment
//! ```
//!
//! The identifier must start at column 0. The expression runs to the first
//! `;`, which may be several lines further down. Lines that do not fit are
//! skipped without a diagnostic.

use crate::scanner::{is_identifier_char, is_inline_whitespace, Cursor};
use crate::span::{Position, Span};
use config::constants::LINE_COMMENT_MARKER;
use log::trace;

/// An assignment located in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMatch<'a> {
    /// Assignment target.
    pub name: &'a str,
    /// Right-hand side, trimmed.
    pub expression: &'a str,
    /// Same-line trailing comment including its `//` marker.
    pub comment: Option<&'a str>,
    /// From the start of the assignment's line to the end of the match.
    pub span: Span,
    /// Line of the assignment target (0-indexed).
    pub line: usize,
}

/// Finds every assignment that starts inside `section`.
///
/// ## Parameters
///
/// - `source`: Text the section span refers to
/// - `section`: Byte range to scan; matches never extend past its end
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::assignment::find_assignments;
/// use openscad_customizer::Span;
///
/// let source = "width = 10; // 1:20\ncube(width);\n";
/// let found = find_assignments(source, Span::new(0, source.len()));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "width");
/// assert_eq!(found[0].comment, Some("// 1:20"));
/// ```
pub fn find_assignments(source: &str, section: Span) -> Vec<AssignmentMatch<'_>> {
    let code = source.get(..section.end()).unwrap_or(source);
    let Some(before) = code.get(..section.start()) else {
        return Vec::new();
    };
    let line = before.matches('\n').count();
    let column = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count());

    let mut cursor = Cursor::at(code, Position::new(before.len(), line, column));
    let mut found = Vec::new();

    while !cursor.is_eof() {
        if cursor.at_line_start() {
            match match_assignment(&cursor) {
                Attempt::Matched(assignment, next) => {
                    trace!("assignment '{}' on line {}", assignment.name, assignment.line + 1);
                    found.push(assignment);
                    cursor = next;
                    continue;
                }
                Attempt::Exhausted => {
                    trace!("no `;` left after line {}", cursor.position().line + 1);
                    break;
                }
                Attempt::Skipped => {}
            }
        }
        cursor.skip_line();
    }

    found
}

/// Outcome of trying to match an assignment at a line start.
enum Attempt<'a> {
    /// An assignment, with the cursor past its end.
    Matched(AssignmentMatch<'a>, Cursor<'a>),
    /// This line is not an assignment.
    Skipped,
    /// No `;` remains, so no later line can match either.
    Exhausted,
}

fn match_assignment<'a>(start: &Cursor<'a>) -> Attempt<'a> {
    let mut cursor = start.clone();
    let origin = cursor.position();

    let name = cursor.advance_while(is_identifier_char);
    if name.is_empty() {
        return Attempt::Skipped;
    }

    cursor.advance_while(char::is_whitespace);
    if !cursor.eat('=') || cursor.peek() == Some('=') {
        return Attempt::Skipped;
    }
    cursor.advance_while(char::is_whitespace);

    let expression = cursor.advance_while(|c| c != ';').trim();
    if !cursor.eat(';') {
        return Attempt::Exhausted;
    }
    if expression.is_empty() {
        return Attempt::Skipped;
    }

    cursor.advance_while(is_inline_whitespace);
    let comment = cursor
        .starts_with(LINE_COMMENT_MARKER)
        .then(|| cursor.advance_while(|c| c != '\n'));

    let assignment = AssignmentMatch {
        name,
        expression,
        comment,
        span: Span::new(origin.byte, cursor.position().byte),
        line: origin.line,
    };
    Attempt::Matched(assignment, cursor)
}

// =============================================================================
// TESTS
// =============================================================================
