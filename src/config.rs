//! Analyzer configuration.
//!
//! ```
//! use doclex::config::AnalyzerConfig;
//!
//! let config: AnalyzerConfig = serde_json::from_str(r#"{"language": "eng"}"#).unwrap();
//! assert_eq!(config.language.as_deref(), Some("eng"));
//! assert_eq!(config.min_language_confidence, 0.0);
//! config.validate().unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DoclexError, Result};

/// Settings for a [`DocumentAnalyzer`](crate::document_analyzer::DocumentAnalyzer).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language code to use instead of identifying the language of the body.
    pub language: Option<String>,

    /// Minimum identification confidence, between 0 and 1.
    pub min_language_confidence: f64,

    /// Reject identifications that are flagged as unreliable.
    pub require_reliable_language: bool,

    /// JSON file replacing the built-in POS label table.
    pub pos_labels_path: Option<PathBuf>,
}

impl AnalyzerConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DoclexError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: AnalyzerConfig = serde_json::from_str(&content)
            .map_err(|e| DoclexError::config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_language_confidence) {
            return Err(DoclexError::config(format!(
                "min_language_confidence must be within [0, 1], got {}",
                self.min_language_confidence
            )));
        }

        if let Some(language) = &self.language {
            if language.trim().is_empty() {
                return Err(DoclexError::config("language must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.language, None);
        assert_eq!(config.min_language_confidence, 0.0);
        assert!(!config.require_reliable_language);
        assert!(config.pos_labels_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"min_language_confidence": 0.5, "require_reliable_language": true}}"#
        )
        .unwrap();

        let config = AnalyzerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.min_language_confidence, 0.5);
        assert!(config.require_reliable_language);
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_invalid_values() {
        let config = AnalyzerConfig {
            min_language_confidence: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DoclexError::Config(_))));

        let config = AnalyzerConfig {
            language: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DoclexError::Config(_))));
    }

    #[test]
    fn test_unreadable_or_malformed_file() {
        let result = AnalyzerConfig::from_json_file("/nonexistent/doclex.json");
        assert!(matches!(result, Err(DoclexError::Config(_))));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = AnalyzerConfig::from_json_file(file.path());
        assert!(matches!(result, Err(DoclexError::Config(_))));
    }
}
