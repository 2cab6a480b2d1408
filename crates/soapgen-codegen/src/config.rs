//! Generator configuration (soapgen.toml)
//!
//! The configuration is a plain value handed to the synthesizer; nothing
//! reads it from global state.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// What the rendered class does when a class of the same name already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassExistsPolicy {
    /// Declare the class unconditionally
    #[default]
    Unchecked,
    /// Wrap the declaration in a `class_exists` guard
    Guarded,
}

/// The configuration surface read during synthesis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Prepended to the service identifier
    pub prefix: String,

    /// Appended to the service identifier
    pub suffix: String,

    /// Class-exists policy for the rendered class
    pub class_exists: ClassExistsPolicy,

    /// Location of the contract document, used as the constructor default
    pub input_file: String,

    /// Transport feature flags, OR-ed together in this order
    pub option_features: Vec<String>,

    /// Transport cache directive; empty means unset
    pub wsdl_cache: String,

    /// Transport compression directive; empty means unset
    pub compression: String,
}

impl GeneratorConfig {
    /// Parse a configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a configuration from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for feature in &self.option_features {
            if !is_valid_feature(feature) {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid feature flag '{}'. Must be a constant name or an integer",
                    feature
                )));
            }
        }
        let directives = [("wsdl-cache", &self.wsdl_cache), ("compression", &self.compression)];
        for (key, value) in directives {
            if !value.is_empty() && !is_valid_directive(value) {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid {} '{}'. Must be constant names or integers joined by '|'",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

/// A feature flag is a constant name (`SOAP_SINGLE_ELEMENT_ARRAYS`) or an integer literal
fn is_valid_feature(feature: &str) -> bool {
    let mut chars = feature.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => feature.chars().all(|c| c.is_ascii_digit()),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A directive is one or more feature-style terms OR-ed together, e.g.
/// `SOAP_COMPRESSION_ACCEPT | SOAP_COMPRESSION_GZIP`
fn is_valid_directive(value: &str) -> bool {
    value.split('|').all(|term| is_valid_feature(term.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
prefix = "Ws"
suffix = "Service"
class-exists = "guarded"
input-file = "http://example.com/weather?wsdl"
option-features = ["SOAP_SINGLE_ELEMENT_ARRAYS", "SOAP_USE_XSI_ARRAY_TYPE"]
wsdl-cache = "WSDL_CACHE_NONE"
compression = "SOAP_COMPRESSION_ACCEPT"
"#;

        let config = GeneratorConfig::from_str(toml).unwrap();
        assert_eq!(config.prefix, "Ws");
        assert_eq!(config.suffix, "Service");
        assert_eq!(config.class_exists, ClassExistsPolicy::Guarded);
        assert_eq!(config.option_features.len(), 2);
        assert_eq!(config.wsdl_cache, "WSDL_CACHE_NONE");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GeneratorConfig::from_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.class_exists, ClassExistsPolicy::Unchecked);
    }

    #[test]
    fn test_invalid_feature_rejected() {
        let toml = r#"option-features = ["SOAP_X", ""]"#;
        assert!(matches!(
            GeneratorConfig::from_str(toml),
            Err(ConfigError::ValidationError(_))
        ));

        let toml = r#"option-features = ["1 | 2"]"#;
        assert!(GeneratorConfig::from_str(toml).is_err());
    }

    #[test]
    fn test_feature_validation() {
        assert!(is_valid_feature("SOAP_SINGLE_ELEMENT_ARRAYS"));
        assert!(is_valid_feature("_X1"));
        assert!(is_valid_feature("4"));

        assert!(!is_valid_feature(""));
        assert!(!is_valid_feature("4A"));
        assert!(!is_valid_feature("A-B"));
    }

    #[test]
    fn test_directives_must_be_constants() {
        let toml = r#"compression = "SOAP_COMPRESSION_ACCEPT | SOAP_COMPRESSION_GZIP""#;
        assert!(GeneratorConfig::from_str(toml).is_ok());

        let toml = r#"wsdl-cache = "WSDL_CACHE_NONE); echo 1; (""#;
        assert!(matches!(
            GeneratorConfig::from_str(toml),
            Err(ConfigError::ValidationError(_))
        ));

        let config = GeneratorConfig {
            compression: "gzip()".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_directive_validation() {
        assert!(is_valid_directive("WSDL_CACHE_BOTH"));
        assert!(is_valid_directive("32|5"));
        assert!(!is_valid_directive("A |"));
        assert!(!is_valid_directive("'none'"));
    }

    #[test]
    fn test_unknown_class_exists_policy() {
        let toml = r#"class-exists = "sometimes""#;
        assert!(matches!(
            GeneratorConfig::from_str(toml),
            Err(ConfigError::ParseError(_))
        ));
    }
}
