//! # Config Crate
//!
//! Centralized configuration constants for the OpenSCAD customizer.
//! Every comment marker, separator and keyword the parameter scanner
//! recognises is defined here so the scanning crates stay free of literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ScanConfig, LINE_COMMENT_MARKER};
//!
//! let config = ScanConfig::default();
//! assert!(config.is_definition_keyword("module"));
//! assert_eq!(LINE_COMMENT_MARKER, "//");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All markers defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **OpenSCAD Compatible**: Conventions match the OpenSCAD customizer

pub mod constants;
