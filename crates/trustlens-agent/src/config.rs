//! Agent descriptor and capability configuration

use serde::{Deserialize, Serialize};
use trustlens_analyzer::{MODEL_MODE, MODEL_NAME, MODEL_VERSION};
use trustlens_domain::AgentInfo;

/// Capabilities advertised by the heuristic agent
pub const CAPABILITIES: &[&str] = &[
    "claim_extraction",
    "linguistic_analysis",
    "domain_reputation",
    "reasoning_generation",
    "heuristic_evaluation",
];

/// Approach statement advertised by the agent
pub const APPROACH: &str = "Rule-based heuristic analysis - no external APIs";

/// Privacy statement advertised by the agent
pub const PRIVACY: &str = "All analysis performed locally";

/// Evaluation settings of the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Kind of agent being evaluated
    pub agent_type: String,

    /// Whether analyses are scored for consistency
    pub evaluation_enabled: bool,

    /// Whether evaluations feed any training loop (never in this agent)
    pub training_enabled: bool,

    /// How inference is performed
    pub inference_mode: String,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            agent_type: "heuristic_analyzer".to_string(),
            evaluation_enabled: true,
            training_enabled: false,
            inference_mode: "deterministic".to_string(),
        }
    }
}

/// Full capability descriptor returned by [`AgentDescriptor::get_config`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model name
    pub model: String,
    /// Model version
    pub version: String,
    /// Capability names
    pub capabilities: Vec<String>,
    /// Operating mode
    pub mode: String,
    /// Approach statement
    pub approach: String,
    /// Privacy statement
    pub privacy: String,
    /// Evaluation settings
    pub evaluation: EvaluationSettings,
}

/// Static description of the agent wrapping the analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    model: String,
    version: String,
    mode: String,
    capabilities: Vec<String>,
    evaluation: EvaluationSettings,
}

impl AgentDescriptor {
    /// Create a descriptor for the given model name
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            version: MODEL_VERSION.to_string(),
            mode: MODEL_MODE.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            evaluation: EvaluationSettings::default(),
        }
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full capability descriptor
    pub fn get_config(&self) -> AgentConfig {
        AgentConfig {
            model: self.model.clone(),
            version: self.version.clone(),
            capabilities: self.capabilities.clone(),
            mode: self.mode.clone(),
            approach: APPROACH.to_string(),
            privacy: PRIVACY.to_string(),
            evaluation: self.evaluation.clone(),
        }
    }

    /// Descriptor in the shape embedded into analysis results
    pub fn agent_info(&self) -> AgentInfo {
        AgentInfo {
            model: self.model.clone(),
            version: self.version.clone(),
            mode: self.mode.clone(),
            approach: Some(APPROACH.to_string()),
            capabilities: self.capabilities.clone(),
            privacy: Some(PRIVACY.to_string()),
        }
    }
}

impl Default for AgentDescriptor {
    fn default() -> Self {
        Self::new(MODEL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptor() {
        let descriptor = AgentDescriptor::default();
        let config = descriptor.get_config();
        assert_eq!(config.model, "heuristic-analyzer-v1");
        assert_eq!(config.version, "2.0.0");
        assert_eq!(config.mode, "production");
        assert_eq!(config.capabilities.len(), 5);
        assert!(config.evaluation.evaluation_enabled);
        assert!(!config.evaluation.training_enabled);
    }

    #[test]
    fn test_custom_model_name() {
        let descriptor = AgentDescriptor::new("heuristic-analyzer-v2");
        assert_eq!(descriptor.model(), "heuristic-analyzer-v2");
        assert_eq!(descriptor.agent_info().model, "heuristic-analyzer-v2");
    }

    #[test]
    fn test_agent_info_carries_capabilities() {
        let info = AgentDescriptor::default().agent_info();
        assert_eq!(info.capabilities[0], "claim_extraction");
        assert_eq!(info.privacy.as_deref(), Some(PRIVACY));
    }
}
