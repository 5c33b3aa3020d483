//! # Customizer Session
//!
//! The live-editing loop around extraction: every time the script changes
//! the parameters are extracted again and the values the user already
//! picked are carried over.
//!
//! ## Example
//!
//! ```rust
//! use openscad_customizer::{CustomizerSession, ParameterValue};
//!
//! let mut session = CustomizerSession::new();
//! assert!(session.update_source("width = 10;"));
//! session.set_value("width", 25.0).unwrap();
//!
//! // Editing the script keeps the chosen width
//! session.update_source("width = 10;\nheight = 5;");
//! assert_eq!(session.get("width").unwrap().value, ParameterValue::Number(25.0));
//! ```

use crate::error::CustomizerError;
use crate::extract::extract_parameters_with;
use crate::merge::merge_values;
use crate::overrides::value_overrides;
use crate::parameter::{Parameter, ParameterValue};
use config::constants::ScanConfig;
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Current parameter generation of one editor.
#[derive(Debug, Clone, Default)]
pub struct CustomizerSession {
    config: ScanConfig,
    parameters: Vec<Parameter>,
    defaults: HashMap<String, ParameterValue>,
}

impl CustomizerSession {
    /// Creates a session with the default scanner configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom scanner configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the script and re-extracts its parameters.
    ///
    /// ## Returns
    ///
    /// `true` if the new script has at least one parameter. Editors use this
    /// to leave the customizer view when nothing is left to customize.
    pub fn update_source(&mut self, source: &str) -> bool {
        let fresh = extract_parameters_with(source, &self.config);
        self.defaults = fresh
            .iter()
            .map(|param| (param.name.clone(), param.value.clone()))
            .collect();
        self.parameters = merge_values(&self.parameters, fresh);
        debug!("session now has {} parameters", self.parameters.len());
        self.has_parameters()
    }

    /// Parameters in extraction order, carrying the user's values.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|param| param.name == name)
    }

    /// Returns true if the current script has any parameter.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Sets a parameter's value.
    ///
    /// ## Errors
    ///
    /// - [`CustomizerError::UnknownParameter`] when no parameter has this name
    /// - [`CustomizerError::TypeMismatch`] when the value's type differs
    /// - [`CustomizerError::NonFiniteNumber`] for NaN or infinite numbers
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<ParameterValue>,
    ) -> Result<(), CustomizerError> {
        let value = value.into();
        let param = self
            .parameters
            .iter_mut()
            .find(|param| param.name == name)
            .ok_or_else(|| CustomizerError::UnknownParameter(name.to_string()))?;

        if value.kind() != param.kind {
            return Err(CustomizerError::TypeMismatch {
                name: name.to_string(),
                expected: param.kind,
                found: value.kind(),
            });
        }
        if value.as_number().is_some_and(|n| !n.is_finite()) {
            return Err(CustomizerError::NonFiniteNumber(name.to_string()));
        }

        param.value = value;
        Ok(())
    }

    /// Restores one parameter to the script's default.
    ///
    /// ## Errors
    ///
    /// [`CustomizerError::UnknownParameter`] when no parameter has this name.
    pub fn reset_value(&mut self, name: &str) -> Result<(), CustomizerError> {
        let default = self
            .defaults
            .get(name)
            .ok_or_else(|| CustomizerError::UnknownParameter(name.to_string()))?;
        if let Some(param) = self.parameters.iter_mut().find(|param| param.name == name) {
            param.value = default.clone();
        }
        Ok(())
    }

    /// Restores every parameter to the script's defaults.
    pub fn reset_all(&mut self) {
        for param in &mut self.parameters {
            if let Some(default) = self.defaults.get(&param.name) {
                param.value = default.clone();
            }
        }
    }

    /// Named value overrides for the modeling engine.
    pub fn overrides(&self) -> Map<String, Value> {
        value_overrides(&self.parameters)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = CustomizerSession::new();
        assert!(!session.has_parameters());
        assert!(session.parameters().is_empty());
    }

    #[test]
    fn test_update_without_parameters() {
        let mut session = CustomizerSession::new();
        assert!(!session.update_source("cube(10);"));
    }

    #[test]
    fn test_set_value_type_checked() {
        let mut session = CustomizerSession::new();
        session.update_source("width = 10;");
        assert_eq!(
            session.set_value("width", "wide"),
            Err(CustomizerError::TypeMismatch {
                name: "width".to_string(),
                expected: crate::ParameterType::Number,
                found: crate::ParameterType::String,
            })
        );
        assert_eq!(
            session.set_value("depth", 1.0),
            Err(CustomizerError::UnknownParameter("depth".to_string()))
        );
        assert_eq!(
            session.set_value("width", f64::NAN),
            Err(CustomizerError::NonFiniteNumber("width".to_string()))
        );
    }

    #[test]
    fn test_reset_value_restores_default() {
        let mut session = CustomizerSession::new();
        session.update_source("width = 10;\nlabel = \"a\";");
        session.set_value("width", 3.0).unwrap();
        session.set_value("label", "b").unwrap();

        session.reset_value("width").unwrap();
        assert_eq!(session.get("width").unwrap().value, ParameterValue::Number(10.0));
        assert_eq!(session.get("label").unwrap().value, ParameterValue::String("b".into()));

        session.reset_all();
        assert_eq!(session.get("label").unwrap().value, ParameterValue::String("a".into()));
    }

    #[test]
    fn test_reset_unknown_parameter() {
        let mut session = CustomizerSession::new();
        assert!(session.reset_value("nope").is_err());
    }

    #[test]
    fn test_custom_config_changes_prefix() {
        let config = ScanConfig::new(["module"]).unwrap();
        let mut session = CustomizerSession::with_config(config);
        session.update_source("a = 1;\nfunction f() = 1;\nb = 2;");
        assert_eq!(session.parameters().len(), 2);
    }
}
