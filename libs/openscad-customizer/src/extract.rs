//! # Parameter Extraction
//!
//! Composes segmentation, assignment scanning, inference and annotation
//! into the public extraction pass.
//!
//! ```text
//! source → normalize → declaration prefix → sections → assignments → ParameterSet
//! ```
//!
//! Extraction is pure: it keeps no state between calls and never fails.

use crate::annotation::classify;
use crate::assignment::{find_assignments, AssignmentMatch};
use crate::infer::infer_value;
use crate::parameter::Parameter;
use crate::scanner::{normalize_line_endings, preceding_line};
use crate::segment::{declaration_prefix, segment};
use config::constants::{ScanConfig, LINE_COMMENT_MARKER};
use log::debug;
use std::collections::HashMap;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Extracts customizer parameters from OpenSCAD source.
///
/// ## Returns
///
/// Parameters in first-insertion order of their names. An empty list is a
/// normal result for scripts without parameters.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::{extract_parameters, ParameterValue};
///
/// let params = extract_parameters("/* [Size] */\nwidth = 10; // 1:20\n");
/// assert_eq!(params.len(), 1);
/// assert_eq!(params[0].group.as_deref(), Some("Size"));
/// assert_eq!(params[0].value, ParameterValue::Number(10.0));
/// ```
pub fn extract_parameters(source: &str) -> Vec<Parameter> {
    extract_parameters_with(source, &ScanConfig::default())
}

/// Extracts customizer parameters using a custom scanner configuration.
pub fn extract_parameters_with(source: &str, config: &ScanConfig) -> Vec<Parameter> {
    let source = normalize_line_endings(source);
    let prefix = declaration_prefix(&source, config);

    let mut parameters = ParameterSet::new();
    for section in segment(prefix) {
        for assignment in find_assignments(prefix, section.span) {
            let mut param = build_parameter(prefix, &assignment);
            param.group = section.group.clone();
            parameters.insert(param);
        }
    }

    debug!("extracted {} parameters", parameters.len());
    parameters.into_vec()
}

fn build_parameter(source: &str, assignment: &AssignmentMatch<'_>) -> Parameter {
    let mut param = Parameter::new(assignment.name, infer_value(assignment.expression));
    if let Some(comment) = assignment.comment {
        classify(comment).apply(&mut param);
    }
    param.description = description_for(source, assignment.span.start());
    param
}

/// Reads the description from the line directly above an assignment.
fn description_for(source: &str, line_start: usize) -> Option<String> {
    let line = preceding_line(source, line_start)?.trim();
    let text = line.strip_prefix(LINE_COMMENT_MARKER)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// =============================================================================
// PARAMETER SET
// =============================================================================

/// Parameters keyed by name, ordered by first insertion.
///
/// Re-inserting a name replaces the stored parameter but keeps its position.
///
/// ## Example
///
/// ```rust
/// use openscad_customizer::{Parameter, ParameterSet};
///
/// let mut set = ParameterSet::new();
/// set.insert(Parameter::new("a", 1.0));
/// set.insert(Parameter::new("b", 2.0));
/// set.insert(Parameter::new("a", 3.0));
/// let names: Vec<&str> = set.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["a", "b"]);
/// assert_eq!(set.get("a").and_then(|p| p.value.as_number()), Some(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
    index: HashMap<String, usize>,
}

impl ParameterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any earlier one with the same name.
    pub fn insert(&mut self, param: Parameter) {
        match self.index.get(&param.name) {
            Some(&position) => self.entries[position] = param,
            None => {
                self.index.insert(param.name.clone(), self.entries.len());
                self.entries.push(param);
            }
        }
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter was inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the set, returning parameters in insertion order.
    pub fn into_vec(self) -> Vec<Parameter> {
        self.entries
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = Self::new();
        for param in iter {
            set.insert(param);
        }
        set
    }
}

// =============================================================================
// TESTS
// =============================================================================
