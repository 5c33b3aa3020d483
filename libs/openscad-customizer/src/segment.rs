//! # Region Segmentation
//!
//! Cuts a script down to its declaration prefix (everything before the
//! first `module`/`function` definition) and splits that prefix into
//! group sections introduced by `/* [Label] */` heading comments.
//!
//! ```text
//! /* [Size] */        ─┐ section "Size"
//! width = 10;          │
//! /* [Color] */       ─┤ section "Color"
//! color = "red";      ─┘
//! module part() {}      (discarded)
//! ```

use crate::scanner::{is_identifier_char, lines};
use crate::span::Span;
use config::constants::{
    ScanConfig, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, HEADING_CLOSE, HEADING_OPEN,
};
use log::{debug, trace};

// =============================================================================
// GROUP SECTION
// =============================================================================

/// A contiguous span of the declaration prefix owned by one heading.
///
/// Sections live only for the duration of one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    /// The heading comment as written (trimmed), or empty for the
    /// synthetic section of an ungrouped script.
    pub id: String,
    /// Trimmed heading label; `None` when the script has no headings.
    pub group: Option<String>,
    /// Byte span of the section within the declaration prefix.
    pub span: Span,
}

impl GroupSection {
    /// Returns the section's code within `prefix`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::segment::segment;
    ///
    /// let prefix = "/* [A] */\na = 1;\n";
    /// let sections = segment(prefix);
    /// assert_eq!(sections[0].code(prefix), prefix);
    /// ```
    pub fn code<'a>(&self, prefix: &'a str) -> &'a str {
        self.span.slice(prefix)
    }
}

// =============================================================================
// DECLARATION PREFIX
// =============================================================================

/// Returns the text before the first line that opens a construct definition.
///
/// A line opens a definition when it starts, at column 0, with one of the
/// configured keywords followed by whitespace.
///
/// ## Example
///
/// ```rust
/// use config::constants::ScanConfig;
/// use openscad_customizer::segment::declaration_prefix;
///
/// let source = "a = 1;\nmodule m() { b = 2; }\n";
/// assert_eq!(declaration_prefix(source, &ScanConfig::default()), "a = 1;\n");
/// ```
pub fn declaration_prefix<'a>(source: &'a str, config: &ScanConfig) -> &'a str {
    for (span, line) in lines(source) {
        if opens_definition(line, config) {
            debug!("declaration prefix ends at byte {}", span.start());
            return &source[..span.start()];
        }
    }
    source
}

fn opens_definition(line: &str, config: &ScanConfig) -> bool {
    let Some(word_end) = line.find(|c: char| !is_identifier_char(c)) else {
        return false;
    };
    let next_is_space = line[word_end..].starts_with(|c: char| c.is_whitespace());
    next_is_space && config.is_definition_keyword(&line[..word_end])
}

// =============================================================================
// HEADINGS
// =============================================================================

/// Parses a group heading comment and returns its trimmed label.
///
/// A heading is a line holding only a block comment whose content is a
/// single bracketed label. Empty labels are not headings.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::segment::parse_heading;
///
/// assert_eq!(parse_heading("/* [ Size ] */"), Some("Size"));
/// assert_eq!(parse_heading("/* Size */"), None);
/// assert_eq!(parse_heading("/* [] */"), None);
/// ```
pub fn parse_heading(line: &str) -> Option<&str> {
    let comment = line
        .trim()
        .strip_prefix(BLOCK_COMMENT_OPEN)?
        .strip_suffix(BLOCK_COMMENT_CLOSE)?
        .trim();
    let inner = comment.strip_prefix(HEADING_OPEN)?.strip_suffix(HEADING_CLOSE)?;
    if inner.contains(HEADING_OPEN) || inner.contains(HEADING_CLOSE) {
        return None;
    }
    let label = inner.trim();
    (!label.is_empty()).then_some(label)
}

// =============================================================================
// SEGMENTATION
// =============================================================================

/// Splits a declaration prefix into group sections.
///
/// Each heading starts a section that runs to the next heading or the end of
/// the prefix. Text before the first heading belongs to no section. Without
/// any heading the whole prefix becomes one ungrouped section, so the result
/// is never empty.
pub fn segment(prefix: &str) -> Vec<GroupSection> {
    let headings: Vec<(Span, &str, &str)> = lines(prefix)
        .filter_map(|(span, line)| parse_heading(line).map(|label| (span, line.trim(), label)))
        .collect();

    if headings.is_empty() {
        trace!("no group headings, using one ungrouped section");
        return vec![GroupSection {
            id: String::new(),
            group: None,
            span: Span::new(0, prefix.len()),
        }];
    }

    let sections: Vec<GroupSection> = headings
        .iter()
        .enumerate()
        .map(|(index, (span, id, label))| {
            let end = headings
                .get(index + 1)
                .map_or(prefix.len(), |(next, _, _)| next.start());
            GroupSection {
                id: id.to_string(),
                group: Some(label.to_string()),
                span: Span::new(span.start(), end),
            }
        })
        .collect();

    trace!("found {} group sections", sections.len());
    sections
}

// =============================================================================
// TESTS
// =============================================================================
