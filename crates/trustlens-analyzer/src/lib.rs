//! TrustLens Analyzer
//!
//! Deterministic, rule-based credibility analysis of text content.
//!
//! # Overview
//!
//! The Analyzer assigns a heuristic trust score to a piece of content,
//! extracts candidate factual claims, flags suspicious patterns and explains
//! its conclusion. There is no learned model and no network access: the same
//! input always yields the same score, claims, flags and summary.
//!
//! # Architecture
//!
//! ```text
//!            ┌─> Signals ─┬─> Trust Score ─┐
//! Input ─────┤            ├─> Flags ───────┼─> Reasoning ─> AnalysisResult
//!            └─> Claims ──┴────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use trustlens_analyzer::{Analyzer, AnalyzerConfig};
//! use trustlens_domain::AnalysisInput;
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
//! let input = AnalysisInput::new("SHOCKING!!! You won't believe this!!!")
//!     .with_url("https://facebook.com/x");
//!
//! let result = analyzer.analyze(&input);
//! assert!(result.trust_score < 40);
//! assert!(!result.claims.is_empty());
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;

pub mod claims;
pub mod flags;
pub mod lexicon;
pub mod reasoning;
pub mod scoring;
pub mod signals;


pub use analyzer::{
    agent_info, analyze_content, empty_analysis, Analyzer, MODEL_APPROACH, MODEL_MODE,
    MODEL_NAME, MODEL_VERSION, NO_URL,
};
pub use claims::extract_claims;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use flags::generate_flags;
pub use reasoning::generate_reasoning;
pub use scoring::compute_trust_score;
pub use signals::{compute_signals, domain_reputation};
