//! Human-readable reasoning attached to an analysis

use serde::{Deserialize, Serialize};

/// One step of the analysis narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningStep {
    /// 1-based step number
    pub step: u32,
    /// Step title
    pub title: String,
    /// What the step looked at
    pub description: String,
    /// What the step concluded
    pub outcome: String,
}

impl ReasoningStep {
    /// Create a new reasoning step
    pub fn new(
        step: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            step,
            title: title.into(),
            description: description.into(),
            outcome: outcome.into(),
        }
    }
}

/// Narrative explanation of an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reasoning {
    /// Ordered steps
    pub steps: Vec<ReasoningStep>,
    /// Overall summary
    pub summary: String,
    /// How the analysis was performed
    pub methodology: String,
}
