//! Agent error types

use thiserror::Error;

/// Errors that can occur in agent operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// Decision payload is not valid JSON
    #[error("Decision error: {0}")]
    Decision(String),

    /// Analyzer configuration error
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] trustlens_analyzer::AnalyzerError),
}

impl From<serde_json::Error> for AgentError {
    fn from(e: serde_json::Error) -> Self {
        AgentError::Decision(e.to_string())
    }
}
