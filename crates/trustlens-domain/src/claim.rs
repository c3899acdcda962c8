//! Claim module - sentences that assert a checkable fact

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verification status assigned to an extracted claim
///
/// The status is a heuristic label derived from the wording of the sentence,
/// not the outcome of any external fact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Attributed to a study, research or named source
    Verified,

    /// No attribution, or hedged wording
    Unverified,

    /// Strong assertion without hedging
    Disputed,

    /// Sensational wording
    Misleading,
}

impl ClaimStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "verified",
            ClaimStatus::Unverified => "unverified",
            ClaimStatus::Disputed => "disputed",
            ClaimStatus::Misleading => "misleading",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim extracted from analyzed content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// 1-based position in extraction order
    pub id: u32,

    /// Sentence text, truncated to the configured limit
    pub text: String,

    /// Heuristic verification status
    pub status: ClaimStatus,

    /// Confidence in the claim (0-100)
    pub confidence: u8,

    /// Descriptions of the kinds of sources the sentence mentions
    pub sources: Vec<String>,

    /// Fixed explanation keyed by status
    pub reasoning: String,
}

impl Claim {
    /// Create a new claim
    pub fn new(
        id: u32,
        text: impl Into<String>,
        status: ClaimStatus,
        confidence: u8,
        sources: Vec<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            status,
            confidence: confidence.min(100),
            sources,
            reasoning: reasoning.into(),
        }
    }
}
