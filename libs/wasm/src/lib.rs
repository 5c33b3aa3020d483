//! WASM-facing entry points for the OpenSCAD customizer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as JSON text in the shape
//! produced by [`openscad_customizer::Parameter`]'s serde derive. Native
//! tests call the `_internal` helpers, which return Rust errors instead of
//! `JsValue`s and therefore do not need a JS host.
//!
//! ```
//! let json = openscad_customizer_wasm::extract_parameters_internal("width = 10;").unwrap();
//! assert!(json.contains("\"width\""));
//! ```

mod error;

pub use error::BridgeError;

use js_sys::Array;
use log::{debug, Level};
use openscad_customizer::{
    extract_parameters, merge_values, CustomizerSession, Parameter, ParameterValue,
};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "openscad-customizer-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records at `level` or above to the browser console.
///
/// Accepts `error`, `warn`, `info`, `debug` or `trace` in any case. Call at
/// most once; a second call fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // init_logging("debug");
/// ```
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let level = log_level_internal(level)?;
    console_log::init_with_level(level).map_err(|_| BridgeError::LoggerInstalled)?;
    debug!("console logging enabled at {level}");
    Ok(())
}

/// Host-only helper behind [`init_logging`].
pub fn log_level_internal(name: &str) -> Result<Level, BridgeError> {
    name.trim()
        .parse()
        .map_err(|_| BridgeError::LogLevel(name.to_string()))
}

// =============================================================================
// STATELESS API
// =============================================================================

/// Extracts the parameters of `source` and returns them as a JSON array.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const params = JSON.parse(extract_parameters_json(code));
/// ```
#[wasm_bindgen]
pub fn extract_parameters_json(source: &str) -> Result<String, JsValue> {
    Ok(extract_parameters_internal(source)?)
}

/// Host-only helper behind [`extract_parameters_json`].
pub fn extract_parameters_internal(source: &str) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(&extract_parameters(source))?)
}

/// Re-extracts `source` and carries values over from `previous_json`, the
/// JSON array returned by an earlier call. An empty string means no previous
/// generation.
///
/// # Errors
/// Returns a JavaScript error value when `previous_json` is not a valid
/// parameter array.
#[wasm_bindgen]
pub fn merge_parameters(previous_json: &str, source: &str) -> Result<String, JsValue> {
    Ok(merge_parameters_internal(previous_json, source)?)
}

/// Host-only helper behind [`merge_parameters`].
///
/// ```
/// use openscad_customizer_wasm::merge_parameters_internal;
///
/// let previous = r#"[{"name":"width","type":"number","value":42}]"#;
/// let merged = merge_parameters_internal(previous, "width = 10;").unwrap();
/// assert!(merged.contains("42"));
/// ```
pub fn merge_parameters_internal(previous_json: &str, source: &str) -> Result<String, BridgeError> {
    let previous: Vec<Parameter> = if previous_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(previous_json)?
    };
    let merged = merge_values(&previous, extract_parameters(source));
    Ok(serde_json::to_string(&merged)?)
}

// =============================================================================
// SESSION API
// =============================================================================

/// A live customizer bound to one editor.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const customizer = new Customizer();
/// // if (customizer.update_source(code)) {
/// //   showPanel(JSON.parse(customizer.parameters_json()));
/// // }
/// // customizer.set_value_json("width", "25");
/// // render(code, JSON.parse(customizer.overrides_json()));
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct Customizer {
    session: CustomizerSession,
}

#[wasm_bindgen]
impl Customizer {
    /// Creates an empty customizer.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the script; returns true if it has any parameter.
    pub fn update_source(&mut self, source: &str) -> bool {
        self.session.update_source(source)
    }

    /// Returns true if the current script has any parameter.
    pub fn has_parameters(&self) -> bool {
        self.session.has_parameters()
    }

    /// Returns the current parameters as a JSON array.
    pub fn parameters_json(&self) -> Result<String, JsValue> {
        Ok(self.parameters_json_internal()?)
    }

    /// Returns the parameter names in display order.
    pub fn parameter_names(&self) -> Array {
        self.session
            .parameters()
            .iter()
            .map(|param| JsValue::from_str(&param.name))
            .collect()
    }

    /// Sets a value from its JSON text (`25`, `true`, `"label"`).
    ///
    /// # Errors
    /// Returns a JavaScript error for malformed JSON, unknown names or a
    /// value of the wrong type.
    pub fn set_value_json(&mut self, name: &str, value_json: &str) -> Result<(), JsValue> {
        Ok(self.set_value_internal(name, value_json)?)
    }

    /// Restores one parameter to the script's default.
    pub fn reset_value(&mut self, name: &str) -> Result<(), JsValue> {
        self.session
            .reset_value(name)
            .map_err(|err| BridgeError::from(err).into())
    }

    /// Restores every parameter to the script's defaults.
    pub fn reset_all(&mut self) {
        self.session.reset_all();
    }

    /// Returns the named value overrides for the modeling engine as a JSON
    /// object.
    pub fn overrides_json(&self) -> Result<String, JsValue> {
        Ok(self.overrides_json_internal()?)
    }
}

impl Customizer {
    /// Host-only helper behind [`Customizer::parameters_json`].
    pub fn parameters_json_internal(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self.session.parameters())?)
    }

    /// Host-only helper behind [`Customizer::set_value_json`].
    pub fn set_value_internal(&mut self, name: &str, value_json: &str) -> Result<(), BridgeError> {
        let value: ParameterValue = serde_json::from_str(value_json)?;
        self.session.set_value(name, value).map_err(|err| {
            debug!("rejected value for '{name}': {err}");
            BridgeError::from(err)
        })
    }

    /// Host-only helper behind [`Customizer::overrides_json`].
    pub fn overrides_json_internal(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(&self.session.overrides())?)
    }
}
