//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};

/// Structural caps of the analysis pipeline
///
/// Scoring thresholds and weights are constants; only the sizes that bound the
/// text processing are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum claims extracted per analysis
    pub max_claims: usize,

    /// Sentences must be longer than this many characters
    pub min_sentence_chars: usize,

    /// Sentences must be shorter than this many characters
    pub max_sentence_chars: usize,

    /// Claim text is truncated to this many characters
    pub claim_text_limit: usize,

    /// Leading characters of content scanned for research wording
    pub content_type_prefix_chars: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_claims == 0 {
            return Err(AnalyzerError::Config("max_claims must be greater than 0".to_string()));
        }
        if self.min_sentence_chars >= self.max_sentence_chars {
            return Err(AnalyzerError::Config(
                "min_sentence_chars must be less than max_sentence_chars".to_string(),
            ));
        }
        if self.claim_text_limit == 0 {
            return Err(AnalyzerError::Config(
                "claim_text_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_claims: 3,
            min_sentence_chars: 20,
            max_sentence_chars: 300,
            claim_text_limit: 200,
            content_type_prefix_chars: 500,
        }
    }
}
