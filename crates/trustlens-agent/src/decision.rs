//! Merging an externally supplied decision into an analysis result

use crate::error::AgentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use trustlens_domain::AnalysisResult;

/// Decision made by an external reviewer about an analysis
///
/// Both fields are optional; a field that is missing or not a string is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDecision {
    /// Free-text summary from the reviewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Replacement confidence label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}

impl AgentDecision {
    /// Create a decision with both fields
    pub fn new(summary: impl Into<String>, decision: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            decision: Some(decision.into()),
        }
    }

    /// Read a decision from an arbitrary JSON value, ignoring malformed fields
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                warn!(key, %other, "Ignoring non-string decision field");
                None
            }
            None => None,
        };

        if !value.is_object() {
            warn!(%value, "Decision is not a JSON object, ignoring it");
        }

        Self {
            summary: field("summary"),
            decision: field("decision"),
        }
    }

    /// Parse a decision from JSON text
    ///
    /// Fails only when the text is not JSON at all.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Whether neither field is present
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.decision.is_none()
    }
}

/// Attach a decision to a result
///
/// Present fields are copied onto the result and a present `decision` replaces
/// the confidence label. Absent fields leave the result untouched. The trust
/// score is never changed.
pub fn merge_decision(mut result: AnalysisResult, decision: &AgentDecision) -> AnalysisResult {
    if let Some(summary) = &decision.summary {
        result.agent_summary = Some(summary.clone());
    }
    if let Some(label) = &decision.decision {
        result.agent_decision = Some(label.clone());
        result.confidence_label = label.clone();
    }
    result
}
