//! # Parameter Model
//!
//! The records produced by extraction. They serialize to the JSON shape the
//! browser customizer panel consumes:
//!
//! ```json
//! { "name": "width", "type": "number", "value": 20, "group": "Dimensions",
//!   "description": "Width of the box", "range": { "min": 1, "max": 50, "step": 0.5 } }
//! ```
//!
//! Optional fields are omitted rather than written as `null`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TYPE & VALUE
// =============================================================================

/// The primitive type inferred for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// A typed parameter value.
///
/// Serialized untagged, so a number is written as a JSON number, a boolean
/// as a JSON boolean and a string as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl ParameterValue {
    /// Returns the type this value belongs to.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::{ParameterType, ParameterValue};
    ///
    /// assert_eq!(ParameterValue::Number(1.0).kind(), ParameterType::Number);
    /// ```
    pub fn kind(&self) -> ParameterType {
        match self {
            Self::Boolean(_) => ParameterType::Boolean,
            Self::Number(_) => ParameterType::Number,
            Self::String(_) => ParameterType::String,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

// =============================================================================
// DECORATIONS
// =============================================================================

/// Numeric bounds for a slider or spinner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// One entry of a choice list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterOption {
    /// Value assigned when the entry is picked.
    pub value: ParameterValue,
    /// Text shown for the entry.
    pub label: String,
}

// =============================================================================
// PARAMETER
// =============================================================================

/// A user-tunable parameter found in a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Assignment target, unique within one extraction.
    pub name: String,
    /// Inferred type; always matches `value`.
    #[serde(rename = "type")]
    pub kind: ParameterType,
    /// Current value, initially the script default.
    pub value: ParameterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ParameterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ParameterOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
}

impl Parameter {
    /// Creates an undecorated parameter whose type follows `value`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_customizer::{Parameter, ParameterType};
    ///
    /// let param = Parameter::new("enabled", true);
    /// assert_eq!(param.kind, ParameterType::Boolean);
    /// assert!(param.group.is_none());
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            kind: value.kind(),
            value,
            description: None,
            group: None,
            range: None,
            options: None,
            max_length: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_parameter_json() {
        let param = Parameter::new("height", 15.0);
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value, json!({ "name": "height", "type": "number", "value": 15.0 }));
    }

    #[test]
    fn test_decorated_parameter_json() {
        let mut param = Parameter::new("label", "hi");
        param.group = Some("Text".to_string());
        param.max_length = Some(10.0);
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "label",
                "type": "string",
                "value": "hi",
                "group": "Text",
                "maxLength": 10.0
            })
        );
    }

    #[test]
    fn test_parameter_json_reads_back() {
        let text = r#"{"name":"on","type":"boolean","value":false,"range":{"step":1}}"#;
        let param: Parameter = serde_json::from_str(text).unwrap();
        assert_eq!(param.value, ParameterValue::Boolean(false));
        assert_eq!(param.range.and_then(|r| r.step), Some(1.0));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(ParameterValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(ParameterValue::from("x").as_number(), None);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(ParameterType::Boolean.to_string(), "boolean");
    }
}
