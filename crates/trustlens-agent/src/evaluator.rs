//! Consistency evaluation of analysis results
//!
//! A cheap self-check: low scores should come with several flags, high scores
//! with few, and every result should carry claims and a summary. Each
//! evaluation is appended to an in-memory history.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use trustlens_domain::AnalysisResult;

/// Weight of the score/flag agreement check
const AGREEMENT_WEIGHT: f64 = 0.5;
/// Weight of the claims-present check
const CLAIMS_WEIGHT: f64 = 0.3;
/// Weight of the summary-present check
const SUMMARY_WEIGHT: f64 = 0.2;

/// Quality metrics of one result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Number of claims
    pub claim_count: usize,
    /// Number of flags
    pub flag_count: usize,
    /// Whether the result explains itself
    pub has_reasoning: bool,
    /// Consistency score of the result
    pub score_consistency: f64,
}

/// Outcome of evaluating one result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// RFC 3339 evaluation time
    pub timestamp: String,
    /// Trust score of the evaluated result
    pub trust_score: u8,
    /// Consistency score in [0, 1]
    pub consistency_score: f64,
    /// Detailed metrics
    pub quality_metrics: QualityMetrics,
}

/// Scores results for internal consistency and keeps a history
#[derive(Debug, Default)]
pub struct Evaluator {
    history: Mutex<Vec<Evaluation>>,
}

impl Evaluator {
    /// Create an evaluator with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a result and append the evaluation to the history
    pub fn evaluate_analysis(&self, result: &AnalysisResult) -> Evaluation {
        let evaluation = evaluate(result);

        // A poisoned lock still holds a valid Vec; keep appending to it
        let mut history = self
            .history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        history.push(evaluation.clone());

        evaluation
    }

    /// Snapshot of every evaluation so far, oldest first
    pub fn history(&self) -> Vec<Evaluation> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of evaluations so far
    pub fn len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no evaluation has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean consistency score over the history, `None` when empty
    pub fn mean_consistency(&self) -> Option<f64> {
        let history = self.history();
        if history.is_empty() {
            return None;
        }
        let total: f64 = history.iter().map(|e| e.consistency_score).sum();
        Some(total / history.len() as f64)
    }
}

/// Evaluate a result without recording it
pub fn evaluate(result: &AnalysisResult) -> Evaluation {
    let claim_count = result.claims.len();
    let flag_count = result.flags.len();
    let trust_score = result.trust_score;
    let has_summary = !result.reasoning.summary.is_empty();

    let mut consistency_score = 0.0;

    if trust_score < 40 && flag_count >= 2 {
        consistency_score += AGREEMENT_WEIGHT;
    } else if trust_score > 70 && flag_count <= 1 {
        consistency_score += AGREEMENT_WEIGHT;
    }
    if claim_count > 0 {
        consistency_score += CLAIMS_WEIGHT;
    }
    if has_summary {
        consistency_score += SUMMARY_WEIGHT;
    }

    Evaluation {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        trust_score,
        consistency_score,
        quality_metrics: QualityMetrics {
            claim_count,
            flag_count,
            has_reasoning: has_summary || !result.reasoning.steps.is_empty(),
            score_consistency: consistency_score,
        },
    }
}
