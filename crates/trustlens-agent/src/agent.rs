//! Agent: analyzer plus decision merge plus self-evaluation

use crate::config::AgentDescriptor;
use crate::decision::{merge_decision, AgentDecision};
use crate::error::AgentError;
use crate::evaluator::{Evaluation, Evaluator, QualityMetrics};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use trustlens_analyzer::{Analyzer, AnalyzerConfig};
use trustlens_domain::{AnalysisInput, AnalysisResult};

/// Note attached to every evaluation summary
pub const EVALUATION_NOTE: &str =
    "Heuristic consistency check over the analysis; no model training is performed";

/// Evaluation block embedded into an [`AgentReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Consistency score in [0, 1]
    pub consistency_score: f64,
    /// Detailed metrics
    pub quality_metrics: QualityMetrics,
    /// Fixed explanatory note
    pub note: String,
}

impl From<&Evaluation> for EvaluationSummary {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            consistency_score: evaluation.consistency_score,
            quality_metrics: evaluation.quality_metrics,
            note: EVALUATION_NOTE.to_string(),
        }
    }
}

/// Analysis result enriched by the agent
///
/// Serializes as the flat result record with an extra `evaluation` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    /// The analysis result, with any decision merged in
    #[serde(flatten)]
    pub result: AnalysisResult,

    /// Consistency evaluation of the result
    pub evaluation: EvaluationSummary,
}

/// Wraps the analyzer with a descriptor and an evaluator
#[derive(Debug, Default)]
pub struct Agent {
    descriptor: AgentDescriptor,
    analyzer: Analyzer,
    evaluator: Evaluator,
}

impl Agent {
    /// Create an agent with the default descriptor and analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an agent with a custom analyzer configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AgentError> {
        Ok(Self {
            analyzer: Analyzer::new(config)?,
            ..Self::default()
        })
    }

    /// Replace the descriptor
    pub fn with_descriptor(mut self, descriptor: AgentDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// The agent descriptor
    pub fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    /// The evaluator and its history
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Analyze content, merge an optional decision, and evaluate the outcome
    pub fn analyze(&self, input: &AnalysisInput, decision: Option<&AgentDecision>) -> AgentReport {
        let mut result = self.analyzer.analyze(input);

        if let Some(decision) = decision {
            debug!(
                has_summary = decision.summary.is_some(),
                has_decision = decision.decision.is_some(),
                "Merging agent decision"
            );
            result = merge_decision(result, decision);
        }

        let evaluation = self.evaluator.evaluate_analysis(&result);
        info!(
            id = %result.id,
            trust_score = result.trust_score,
            consistency = evaluation.consistency_score,
            "Agent analysis evaluated"
        );

        result.agent_info = self.descriptor.agent_info();

        AgentReport {
            result,
            evaluation: EvaluationSummary::from(&evaluation),
        }
    }
}
