//! # Value Merge
//!
//! Carries user-chosen values from one extraction generation to the next so
//! that editing the script does not discard what was entered in the
//! customizer panel.

use crate::parameter::{Parameter, ParameterValue};
use log::debug;
use std::collections::HashMap;

/// Transplants values from `previous` onto same-name parameters in `fresh`.
///
/// Only the `value` moves; every other field comes from the fresh
/// extraction. A value is not carried over when the parameter's type changed,
/// since it would no longer match the new type.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::{extract_parameters, merge_values, ParameterValue};
///
/// let mut previous = extract_parameters("width = 10;");
/// previous[0].value = ParameterValue::Number(42.0);
///
/// let merged = merge_values(&previous, extract_parameters("width = 10; // 5\nheight = 2;"));
/// assert_eq!(merged[0].value, ParameterValue::Number(42.0));
/// assert_eq!(merged[0].range.and_then(|r| r.step), Some(5.0));
/// assert_eq!(merged[1].value, ParameterValue::Number(2.0));
/// ```
pub fn merge_values(previous: &[Parameter], fresh: Vec<Parameter>) -> Vec<Parameter> {
    if previous.is_empty() {
        return fresh;
    }

    let prior: HashMap<&str, &ParameterValue> = previous
        .iter()
        .map(|param| (param.name.as_str(), &param.value))
        .collect();

    fresh
        .into_iter()
        .map(|mut param| {
            if let Some(&value) = prior.get(param.name.as_str()) {
                if value.kind() == param.kind {
                    param.value = value.clone();
                } else {
                    debug!(
                        "not carrying {} value into '{}' (now {})",
                        value.kind(),
                        param.name,
                        param.kind
                    );
                }
            }
            param
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
