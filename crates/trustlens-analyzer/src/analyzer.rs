//! Result assembly: runs every stage and builds the final record

use crate::claims::extract_claims;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::flags::{generate_flags, NO_CONTENT};
use crate::lexicon::{contains_any, NEWS_CONTENT_MARKERS, SOCIAL_CONTENT_MARKERS};
use crate::reasoning::generate_reasoning;
use crate::scoring::compute_trust_score;
use crate::signals::compute_signals;
use tracing::{debug, info};
use trustlens_domain::{
    confidence_label, AgentInfo, AnalysisId, AnalysisInput, AnalysisResult, Claim, ClaimStatus,
    ContentMetadata, ContentType, Reasoning,
};

/// Model name reported in `agent_info`
pub const MODEL_NAME: &str = "heuristic-analyzer-v1";
/// Model version reported in `agent_info`
pub const MODEL_VERSION: &str = "2.0.0";
/// Operating mode reported in `agent_info`
pub const MODEL_MODE: &str = "production";
/// Approach reported in `agent_info`
pub const MODEL_APPROACH: &str = "rule-based deterministic analysis";

/// URL echoed when none was supplied
pub const NO_URL: &str = "N/A";

/// Nominal duration reported for a completed analysis
const ANALYSIS_TIME_SECS: f64 = 0.5;

/// Score reported when there is nothing to analyze
const EMPTY_TRUST_SCORE: u8 = 50;

/// Runs the analysis pipeline
///
/// Holds only immutable configuration, so one Analyzer can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new Analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an Analyzer with default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one piece of content
    ///
    /// Empty content short-circuits to [`empty_analysis`].
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let content = input.content.as_str();
        let url = input.url_str();

        if content.is_empty() {
            debug!("No content supplied, returning empty analysis");
            return empty_analysis();
        }

        let claims = extract_claims(content, &self.config);
        let signals = compute_signals(content, url, input.title_str());
        let trust_score = compute_trust_score(&signals);
        let flags = generate_flags(&signals, content);
        let reasoning = generate_reasoning(&signals, trust_score, claims.len());
        let content_type = self.classify_content_type(url, content);

        info!(
            trust_score,
            label = confidence_label(trust_score),
            claims = claims.len(),
            flags = flags.len(),
            %content_type,
            "Analysis complete"
        );

        let id = AnalysisId::new();
        let metadata = ContentMetadata {
            content_length: signals.content_length,
            claim_count: claims.len(),
            flag_count: flags.len(),
            analysis_time: ANALYSIS_TIME_SECS,
        };

        AnalysisResult {
            id,
            timestamp: id.timestamp_rfc3339(),
            url: if url.is_empty() { NO_URL.to_string() } else { url.to_string() },
            content_type,
            trust_score,
            confidence_label: confidence_label(trust_score).to_string(),
            claims,
            flags,
            reasoning,
            agent_info: agent_info(),
            metadata,
            agent_summary: None,
            agent_decision: None,
        }
    }

    /// Classify content by URL markers first, then by research wording near
    /// the start of the content
    pub fn classify_content_type(&self, url: &str, content: &str) -> ContentType {
        let url_lower = url.to_lowercase();

        if contains_any(&url_lower, SOCIAL_CONTENT_MARKERS) {
            return ContentType::SocialMedia;
        }
        if contains_any(&url_lower, NEWS_CONTENT_MARKERS) {
            return ContentType::NewsArticle;
        }

        let prefix: String = content
            .to_lowercase()
            .chars()
            .take(self.config.content_type_prefix_chars)
            .collect();
        if url_lower.contains(".edu") || url_lower.contains(".gov") || prefix.contains("research") {
            return ContentType::Research;
        }

        ContentType::General
    }
}

/// Analyze content with the default configuration
///
/// # Examples
///
/// ```
/// use trustlens_analyzer::analyze_content;
/// use trustlens_domain::AnalysisInput;
///
/// let result = analyze_content(&AnalysisInput::new("").with_url("https://example.com"));
/// assert_eq!(result.trust_score, 50);
/// assert_eq!(result.confidence_label, "No Analysis");
/// ```
pub fn analyze_content(input: &AnalysisInput) -> AnalysisResult {
    Analyzer::default().analyze(input)
}

/// Analyzer description attached to every completed analysis
pub fn agent_info() -> AgentInfo {
    AgentInfo {
        model: MODEL_NAME.to_string(),
        version: MODEL_VERSION.to_string(),
        mode: MODEL_MODE.to_string(),
        approach: Some(MODEL_APPROACH.to_string()),
        capabilities: Vec::new(),
        privacy: None,
    }
}

/// Fixed record returned when no content was supplied
pub fn empty_analysis() -> AnalysisResult {
    let id = AnalysisId::new();

    AnalysisResult {
        id,
        timestamp: id.timestamp_rfc3339(),
        url: NO_URL.to_string(),
        content_type: ContentType::Unknown,
        trust_score: EMPTY_TRUST_SCORE,
        confidence_label: "No Analysis".to_string(),
        claims: vec![Claim::new(
            1,
            "No content provided for analysis",
            ClaimStatus::Unverified,
            0,
            Vec::new(),
            "Empty content cannot be analyzed",
        )],
        flags: vec![NO_CONTENT.to_flag()],
        reasoning: Reasoning {
            steps: Vec::new(),
            summary: "No content was provided for analysis.".to_string(),
            methodology: NO_URL.to_string(),
        },
        agent_info: AgentInfo {
            approach: None,
            ..agent_info()
        },
        metadata: ContentMetadata {
            content_length: 0,
            claim_count: 0,
            flag_count: 1,
            analysis_time: 0.0,
        },
        agent_summary: None,
        agent_decision: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AnalyzerConfig {
            max_claims: 0,
            ..AnalyzerConfig::default()
        };
        assert!(Analyzer::new(config).is_err());
    }

    #[test]
    fn test_classify_content_type() {
        let analyzer = Analyzer::default_config();
        assert_eq!(
            analyzer.classify_content_type("https://reddit.com/r/x", "research"),
            ContentType::SocialMedia
        );
        assert_eq!(
            analyzer.classify_content_type("https://cnn.com/a", ""),
            ContentType::NewsArticle
        );
        assert_eq!(
            analyzer.classify_content_type("https://mit.edu/a", ""),
            ContentType::Research
        );
        assert_eq!(
            analyzer.classify_content_type("", "New Research on sleep"),
            ContentType::Research
        );
        assert_eq!(analyzer.classify_content_type("", "hello"), ContentType::General);
    }

    #[test]
    fn test_research_wording_only_counts_near_start() {
        let analyzer = Analyzer::default_config();
        let content = format!("{} research", "a".repeat(600));
        assert_eq!(analyzer.classify_content_type("", &content), ContentType::General);
    }

    #[test]
    fn test_url_echo() {
        let analyzer = Analyzer::default_config();
        let result = analyzer.analyze(&AnalysisInput::new("Some words here."));
        assert_eq!(result.url, "N/A");

        let result =
            analyzer.analyze(&AnalysisInput::new("Some words here.").with_url("https://a.org"));
        assert_eq!(result.url, "https://a.org");
    }

    #[test]
    fn test_empty_analysis_record() {
        let result = empty_analysis();
        assert_eq!(result.trust_score, 50);
        assert_eq!(result.confidence_label, "No Analysis");
        assert_eq!(result.content_type, ContentType::Unknown);
        assert_eq!(result.claims.len(), 1);
        assert_eq!(result.claims[0].confidence, 0);
        assert_eq!(result.flags.len(), 1);
        assert!(result.flags[0].is_warning());
        assert_eq!(result.flags[0].category, "No Content");
        assert!(result.reasoning.steps.is_empty());
        assert_eq!(result.metadata.claim_count, 0);
        assert_eq!(result.metadata.flag_count, 1);
        assert!(result.agent_info.approach.is_none());
    }
}
