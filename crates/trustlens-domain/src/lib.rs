//! TrustLens Domain Layer
//!
//! This crate defines the value types produced by a content analysis. It holds
//! no analysis logic of its own: every type here is built fresh by the analyzer
//! for a single call, never mutated after construction, and discarded once the
//! caller is done with it.
//!
//! ## Key Concepts
//!
//! - **Signal**: A derived numeric feature of the input text or URL
//! - **Claim**: A sentence asserting a checkable fact, with a verification status
//! - **Flag**: An advisory note describing a credibility-relevant pattern
//! - **Reasoning**: A step-by-step narrative of how the score was reached
//! - **Trust score**: An integer in `[0, 100]` summarizing estimated credibility
//!
//! ## Architecture
//!
//! - Minimal dependencies (identifiers, time rendering, serialization)
//! - Pure data and label mapping only
//! - The pipeline lives in `trustlens-analyzer`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod claim;
pub mod confidence;
pub mod flag;
pub mod reasoning;
pub mod signals;

// Re-exports for convenience
pub use analysis::{
    AgentInfo, AnalysisId, AnalysisInput, AnalysisResult, ContentMetadata, ContentType,
};
pub use claim::{Claim, ClaimStatus};
pub use confidence::{confidence_label, trust_label, ConfidenceBand};
pub use flag::{Flag, FlagType};
pub use reasoning::{Reasoning, ReasoningStep};
pub use signals::SignalSet;
