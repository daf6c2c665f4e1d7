//! Configuration types for reading and writing SBGN-ML.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Missing sections fall back to their defaults.
//!
//! # Example
//!
//! ```
//! # use sbgn::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().indent(), None);
//! assert!(!config.output().xml_declaration());
//! ```

use serde::Deserialize;

use sbgn_xml::WriteOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output formatting section.
    #[serde(default)]
    output: WriteOptions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given output formatting.
    pub fn new(output: WriteOptions) -> Self {
        Self { output }
    }

    /// Returns the output formatting options.
    pub fn output(&self) -> &WriteOptions {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.output().indent(), None);
        assert!(!config.output().xml_declaration());
    }

    #[test]
    fn test_output_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            indent = 2
            xml_declaration = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output().indent(), Some(2));
        assert!(config.output().xml_declaration());
    }

    #[test]
    fn test_partial_output_section() {
        let config: AppConfig = toml::from_str("[output]\nindent = 4\n").unwrap();
        assert_eq!(config.output().indent(), Some(4));
        assert!(!config.output().xml_declaration());
    }
}
