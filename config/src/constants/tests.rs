//! Tests for the scanner configuration.

use super::*;

/// Ensures the default configuration recognises both OpenSCAD keywords.
///
/// # Examples
/// ```
/// use config::constants::ScanConfig;
/// let cfg = ScanConfig::default();
/// assert!(cfg.is_definition_keyword("function"));
/// ```
#[test]
fn default_config_recognises_openscad_keywords() {
    let cfg = ScanConfig::default();
    assert!(cfg.is_definition_keyword("module"));
    assert!(cfg.is_definition_keyword("function"));
    assert!(!cfg.is_definition_keyword("include"));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::ScanConfig;
/// assert!(ScanConfig::new(Vec::<String>::new()).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ScanConfig::new(Vec::<String>::new()).unwrap_err(),
        ConfigError::EmptyKeywords
    );
    assert_eq!(
        ScanConfig::new(["module", "my keyword"]).unwrap_err(),
        ConfigError::InvalidKeyword("my keyword".to_string())
    );
    assert_eq!(
        ScanConfig::new([""]).unwrap_err(),
        ConfigError::InvalidKeyword(String::new())
    );
}

#[test]
fn new_keeps_custom_keywords() {
    let cfg = ScanConfig::new(["module"]).unwrap();
    assert_eq!(cfg.definition_keywords(), &["module".to_string()]);
}

#[test]
fn config_error_display() {
    let msg = ConfigError::InvalidKeyword("a b".to_string()).to_string();
    assert!(msg.contains("identifier"));
    assert!(msg.contains("a b"));
}
