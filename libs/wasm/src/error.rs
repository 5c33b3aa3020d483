//! Errors crossing the JavaScript boundary.

use openscad_customizer::CustomizerError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the JSON bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Malformed JSON from JavaScript, or a value that cannot be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown level name passed to `init_logging`.
    #[error("invalid log level: {0}")]
    LogLevel(String),

    /// A logger was already installed.
    #[error("logger already installed")]
    LoggerInstalled,

    /// The session rejected the request.
    #[error(transparent)]
    Customizer(#[from] CustomizerError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
