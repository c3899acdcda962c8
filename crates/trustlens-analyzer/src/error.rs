//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur while configuring the Analyzer
///
/// Analysis itself cannot fail; every input produces a result.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(e: toml::de::Error) -> Self {
        AnalyzerError::Toml(e.to_string())
    }
}
