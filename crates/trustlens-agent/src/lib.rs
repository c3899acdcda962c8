//! TrustLens Agent
//!
//! Wraps the heuristic analyzer for callers that need more than the bare
//! result record.
//!
//! The agent provides:
//! - A capability descriptor ([`AgentDescriptor::get_config`])
//! - Merging of an external reviewer's decision into a result
//! - A consistency self-evaluation with an in-memory history
//!
//! # Examples
//!
//! ```
//! use trustlens_agent::{Agent, AgentDecision};
//! use trustlens_domain::AnalysisInput;
//!
//! let agent = Agent::new();
//! let decision = AgentDecision::new("Checked by hand", "Needs Review");
//! let report = agent.analyze(&AnalysisInput::new("A short note."), Some(&decision));
//!
//! assert_eq!(report.result.confidence_label, "Needs Review");
//! assert_eq!(agent.evaluator().history().len(), 1);
//! ```

#![warn(missing_docs)]

mod agent;
mod config;
mod decision;
mod error;
mod evaluator;

pub use agent::{Agent, AgentReport, EvaluationSummary, EVALUATION_NOTE};
pub use config::{AgentConfig, AgentDescriptor, EvaluationSettings, APPROACH, CAPABILITIES, PRIVACY};
pub use decision::{merge_decision, AgentDecision};
pub use error::AgentError;
pub use evaluator::{evaluate, Evaluation, Evaluator, QualityMetrics};
