//! Centralized configuration values shared across the OpenSCAD customizer.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// COMMENT MARKERS
// =============================================================================

/// Marker opening a single-line comment.
///
/// # Examples
/// ```
/// use config::constants::LINE_COMMENT_MARKER;
/// assert!("// Width".starts_with(LINE_COMMENT_MARKER));
/// ```
pub const LINE_COMMENT_MARKER: &str = "//";

/// Marker opening a block comment. Group headings are written as block comments.
pub const BLOCK_COMMENT_OPEN: &str = "/*";

/// Marker closing a block comment.
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Bracket opening a group heading label or a choice list.
///
/// # Examples
/// ```
/// use config::constants::{HEADING_CLOSE, HEADING_OPEN};
/// let label = "[Size]";
/// assert!(label.starts_with(HEADING_OPEN) && label.ends_with(HEADING_CLOSE));
/// ```
pub const HEADING_OPEN: char = '[';

/// Bracket closing a group heading label or a choice list.
pub const HEADING_CLOSE: char = ']';

// =============================================================================
// ANNOTATION SEPARATORS
// =============================================================================

/// Separator between the entries of a choice list annotation.
pub const CHOICE_SEPARATOR: char = ',';

/// Separator between the value and the label of a choice list entry.
pub const LABEL_SEPARATOR: char = ':';

/// Separator between the fields of a range annotation.
pub const RANGE_SEPARATOR: char = ':';

// =============================================================================
// DECLARATION PREFIX
// =============================================================================

/// Keywords that open a reusable construct definition. The first line
/// starting with one of these ends the region scanned for parameters.
///
/// # Examples
/// ```
/// use config::constants::DEFINITION_KEYWORDS;
/// assert!(DEFINITION_KEYWORDS.contains(&"module"));
/// ```
pub const DEFINITION_KEYWORDS: [&str; 2] = ["module", "function"];

/// Scanner settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ScanConfig;
/// let config = ScanConfig::default();
/// assert_eq!(config.definition_keywords().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    definition_keywords: Vec<String>,
}

impl ScanConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// definition keywords.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ScanConfig;
    /// let cfg = ScanConfig::new(["module"]).expect("valid config");
    /// assert!(!cfg.is_definition_keyword("function"));
    /// ```
    pub fn new<I, S>(definition_keywords: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let definition_keywords: Vec<String> =
            definition_keywords.into_iter().map(Into::into).collect();
        if definition_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords);
        }
        if let Some(invalid) = definition_keywords.iter().find(|k| !is_keyword(k)) {
            return Err(ConfigError::InvalidKeyword(invalid.clone()));
        }
        Ok(Self {
            definition_keywords,
        })
    }

    /// Returns the construct-definition keywords.
    pub fn definition_keywords(&self) -> &[String] {
        &self.definition_keywords
    }

    /// Returns true if `word` is one of the construct-definition keywords.
    pub fn is_definition_keyword(&self, word: &str) -> bool {
        self.definition_keywords.iter().any(|k| k == word)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            definition_keywords: DEFINITION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

fn is_keyword(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when no definition keyword is supplied.
    EmptyKeywords,
    /// Raised when a keyword is empty or contains non-identifier characters.
    InvalidKeyword(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyKeywords => {
                write!(f, "at least one definition keyword is required")
            }
            ConfigError::InvalidKeyword(value) => {
                write!(f, "definition keyword must be an identifier: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
