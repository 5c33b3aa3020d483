//! # Value Overrides
//!
//! Builds the name → value mapping handed to the modeling engine alongside
//! the script text when a preview or export is requested.

use crate::parameter::{Parameter, ParameterValue};
use serde_json::{Map, Value};

/// Converts parameters into the engine's named value overrides.
///
/// Later parameters win if a name repeats.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::{extract_parameters, value_overrides};
/// use serde_json::json;
///
/// let params = extract_parameters("width = 10;\nlabel = \"hi\";\non = true;");
/// let overrides = value_overrides(&params);
/// assert_eq!(overrides["width"], json!(10.0));
/// assert_eq!(overrides["label"], json!("hi"));
/// assert_eq!(overrides["on"], json!(true));
/// ```
pub fn value_overrides(parameters: &[Parameter]) -> Map<String, Value> {
    parameters
        .iter()
        .map(|param| (param.name.clone(), to_json(&param.value)))
        .collect()
}

fn to_json(value: &ParameterValue) -> Value {
    match value {
        ParameterValue::Boolean(b) => Value::Bool(*b),
        ParameterValue::Number(n) => Value::from(*n),
        ParameterValue::String(s) => Value::String(s.clone()),
    }
}
