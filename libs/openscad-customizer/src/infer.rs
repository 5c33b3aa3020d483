//! # Type & Value Inference
//!
//! Decodes the right-hand side of an assignment into a typed default.
//! Precedence: number literal, then `true`/`false`, then string.

use crate::parameter::ParameterValue;

/// Infers the typed value of an assignment's expression text.
///
/// - Digits with an optional `.digits` fraction is a number. Signed
///   literals such as `-5` are not numbers.
/// - Exactly `true` or `false` is a boolean.
/// - Anything else is a string, with one layer of enclosing double quotes
///   removed. Escape sequences are kept verbatim.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::infer::infer_value;
/// use openscad_customizer::ParameterValue;
///
/// assert_eq!(infer_value("2.5"), ParameterValue::Number(2.5));
/// assert_eq!(infer_value("true"), ParameterValue::Boolean(true));
/// assert_eq!(infer_value("\"red\""), ParameterValue::String("red".into()));
/// assert_eq!(infer_value("[1, 2]"), ParameterValue::String("[1, 2]".into()));
/// ```
pub fn infer_value(expression: &str) -> ParameterValue {
    let text = expression.trim();

    if is_number_literal(text) {
        if let Ok(number) = text.parse::<f64>() {
            return ParameterValue::Number(number);
        }
    }

    match text {
        "true" => return ParameterValue::Boolean(true),
        "false" => return ParameterValue::Boolean(false),
        _ => {}
    }

    ParameterValue::String(strip_quotes(text).to_string())
}

/// Returns true for `digits(.digits)?`.
fn is_number_literal(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Removes one pair of enclosing double quotes from a single-line literal.
fn strip_quotes(text: &str) -> &str {
    if text.contains('\n') {
        return text;
    }
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

// =============================================================================
// TESTS
// =============================================================================
