//! # OpenSCAD Customizer
//!
//! Derives the list of user-tunable parameters from an OpenSCAD script,
//! following the customizer comment conventions:
//!
//! ```openscad
//! /* [Dimensions] */
//! // Width of the box
//! width = 20; // [1:0.5:50]
//! shape = "circle"; // [circle:Circle, square:Square]
//!
//! module box() { ... }   // nothing below here is scanned
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → segment (prefix + group sections) → assignment scan
//!        → infer (type/value) + annotation (range/options/maxLength)
//!        → ParameterSet → Vec<Parameter>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use openscad_customizer::{extract_parameters, ParameterType};
//!
//! let params = extract_parameters("// Wall thickness\nwall = 2; // 0.5\n");
//! assert_eq!(params[0].name, "wall");
//! assert_eq!(params[0].kind, ParameterType::Number);
//! assert_eq!(params[0].description.as_deref(), Some("Wall thickness"));
//! ```
//!
//! ## Design Principles
//!
//! - **Tolerant**: Unrecognised text is skipped, never reported
//! - **Pure**: Same input, same output; no state between calls
//! - **Browser-Safe**: No I/O, compiles to WASM

pub mod annotation;
pub mod assignment;
pub mod error;
pub mod extract;
pub mod infer;
pub mod merge;
pub mod overrides;
pub mod parameter;
pub mod scanner;
pub mod segment;
pub mod session;
pub mod span;

// Re-exports for convenience
pub use error::CustomizerError;
pub use extract::{extract_parameters, extract_parameters_with, ParameterSet};
pub use merge::merge_values;
pub use overrides::value_overrides;
pub use parameter::{Parameter, ParameterOption, ParameterRange, ParameterType, ParameterValue};
pub use session::CustomizerSession;
pub use span::{Position, Span};
