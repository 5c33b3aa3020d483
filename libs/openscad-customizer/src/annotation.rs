//! # Trailing Annotations
//!
//! Classifies the `//` comment that follows an assignment on the same line
//! and applies the result to a parameter. Shapes are tried in a fixed
//! priority order; the first one that fits wins:
//!
//! | Priority | Shape | Example | Result |
//! |---|---|---|---|
//! | 1 | bare number | `// 5` | `maxLength` for strings, `range.step` otherwise |
//! | 2 | bracketed list with a comma | `// [a:A,b:B]` | `options` |
//! | 3 | colon-separated numbers | `// [1:0.5:50]` | `range` |
//! | – | anything else | `// mm` | nothing |
//!
//! Classification is total: every input maps to some [`Annotation`].

use crate::parameter::{Parameter, ParameterOption, ParameterRange, ParameterType, ParameterValue};
use config::constants::{
    CHOICE_SEPARATOR, HEADING_CLOSE, HEADING_OPEN, LABEL_SEPARATOR, LINE_COMMENT_MARKER,
    RANGE_SEPARATOR,
};
use log::debug;

// =============================================================================
// ANNOTATION
// =============================================================================

/// One entry of a choice list, before typing against its parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// The decoded meaning of a trailing comment.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// A single number: a step, or a maximum length for strings.
    Bound(f64),
    /// An explicit choice list, in source order with duplicates kept.
    Choices(Vec<Choice>),
    /// `min:max` or `min:step:max`.
    Range(ParameterRange),
    /// A comment that carries no customizer meaning.
    Unrecognized,
}

/// Classifies a trailing comment.
///
/// The comment may be given with or without its leading `//`.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::annotation::{classify, Annotation};
///
/// assert_eq!(classify("// 5"), Annotation::Bound(5.0));
/// assert!(matches!(classify("// [1:10]"), Annotation::Range(_)));
/// assert!(matches!(classify("// [a,b]"), Annotation::Choices(_)));
/// assert_eq!(classify("// in mm"), Annotation::Unrecognized);
/// ```
pub fn classify(comment: &str) -> Annotation {
    let trimmed = comment.trim();
    let text = trimmed
        .strip_prefix(LINE_COMMENT_MARKER)
        .unwrap_or(trimmed)
        .trim();

    if text.is_empty() {
        return Annotation::Unrecognized;
    }

    if let Some(bound) = parse_number(text) {
        return Annotation::Bound(bound);
    }

    let inner = strip_brackets(text);

    if text.starts_with(HEADING_OPEN) && inner.contains(CHOICE_SEPARATOR) {
        return Annotation::Choices(parse_choices(inner));
    }

    if let Some(range) = parse_range(inner) {
        return Annotation::Range(range);
    }

    Annotation::Unrecognized
}

impl Annotation {
    /// Decorates `param` according to this annotation.
    ///
    /// A bound is a `maxLength` for strings and a `range.step` otherwise.
    /// Colon ranges are only kept for numeric and boolean parameters.
    pub fn apply(self, param: &mut Parameter) {
        match self {
            Annotation::Bound(bound) => match param.kind {
                ParameterType::String => param.max_length = Some(bound),
                ParameterType::Number | ParameterType::Boolean => {
                    param.range = Some(ParameterRange {
                        step: Some(bound),
                        ..ParameterRange::default()
                    });
                }
            },
            Annotation::Choices(choices) => {
                let numeric = param.kind == ParameterType::Number;
                let options = choices
                    .into_iter()
                    .map(|choice| ParameterOption {
                        value: choice_value(&choice.value, numeric),
                        label: choice.label,
                    })
                    .collect();
                param.options = Some(options);
            }
            Annotation::Range(range) => {
                if param.kind == ParameterType::String {
                    debug!("ignoring range on string parameter '{}'", param.name);
                } else {
                    param.range = Some(range);
                }
            }
            Annotation::Unrecognized => {}
        }
    }
}

// =============================================================================
// SHAPES
// =============================================================================

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Removes at most one leading `[` and one trailing `]`.
fn strip_brackets(text: &str) -> &str {
    let text = text.strip_prefix(HEADING_OPEN).unwrap_or(text);
    let text = text.strip_suffix(HEADING_CLOSE).unwrap_or(text);
    text.trim()
}

fn parse_choices(inner: &str) -> Vec<Choice> {
    inner
        .split(CHOICE_SEPARATOR)
        .map(str::trim)
        .map(|item| match item.split_once(LABEL_SEPARATOR) {
            Some((value, label)) => Choice {
                value: value.trim().to_string(),
                label: label.trim().to_string(),
            },
            None => Choice {
                value: item.to_string(),
                label: item.to_string(),
            },
        })
        .collect()
}

fn parse_range(inner: &str) -> Option<ParameterRange> {
    if !inner.contains(RANGE_SEPARATOR) {
        return None;
    }
    let fields = inner
        .split(RANGE_SEPARATOR)
        .map(|field| parse_number(field.trim()))
        .collect::<Option<Vec<f64>>>()?;
    match fields.as_slice() {
        [min, max] => Some(ParameterRange {
            min: Some(*min),
            max: Some(*max),
            step: None,
        }),
        [min, step, max] => Some(ParameterRange {
            min: Some(*min),
            max: Some(*max),
            step: Some(*step),
        }),
        _ => None,
    }
}

fn choice_value(value: &str, numeric: bool) -> ParameterValue {
    if numeric {
        if let Some(number) = parse_number(value) {
            return ParameterValue::Number(number);
        }
    }
    ParameterValue::String(value.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
