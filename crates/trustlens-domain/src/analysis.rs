//! Analysis input and result records

use crate::{Claim, Flag, Reasoning};
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used in the string form of an [`AnalysisId`]
const ID_PREFIX: &str = "analysis-";

/// Unique identifier for an analysis based on UUIDv7
///
/// The embedded millisecond timestamp doubles as the analysis timestamp, so
/// the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AnalysisId(u128);

impl AnalysisId {
    /// Generate a new UUIDv7-based AnalysisId
    ///
    /// # Examples
    ///
    /// ```
    /// use trustlens_domain::AnalysisId;
    ///
    /// let id = AnalysisId::new();
    /// assert!(id.to_string().starts_with("analysis-"));
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an AnalysisId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an AnalysisId from `analysis-<uuid>` or a bare UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use trustlens_domain::AnalysisId;
    ///
    /// let id = AnalysisId::new();
    /// let parsed = AnalysisId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        let raw = s.strip_prefix(ID_PREFIX).unwrap_or(s);
        uuid::Uuid::parse_str(raw)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid analysis id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }

    /// RFC 3339 rendering of [`AnalysisId::timestamp`]
    pub fn timestamp_rfc3339(&self) -> String {
        DateTime::from_timestamp_millis(self.timestamp() as i64)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default()
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, uuid::Uuid::from_u128(self.0))
    }
}

impl From<AnalysisId> for String {
    fn from(id: AnalysisId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for AnalysisId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

/// Content submitted for analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Text to analyze (may be empty)
    #[serde(default)]
    pub content: String,

    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Page title (accepted but not scored)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AnalysisInput {
    /// Create an input with content only
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            url: None,
            title: None,
        }
    }

    /// Attach a source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach a page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The URL, or an empty string when absent
    pub fn url_str(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// The title, or an empty string when absent
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Coarse classification of the analyzed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Hosted on a social platform
    SocialMedia,
    /// Hosted on a news outlet
    NewsArticle,
    /// Institutional host or research wording
    Research,
    /// Anything else
    General,
    /// No content was analyzed
    Unknown,
}

impl ContentType {
    /// Get the kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::SocialMedia => "social-media",
            ContentType::NewsArticle => "news-article",
            ContentType::Research => "research",
            ContentType::General => "general",
            ContentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of the analyzer that produced a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Model name
    pub model: String,
    /// Model version
    pub version: String,
    /// Operating mode
    pub mode: String,
    /// Short description of the approach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    /// Capability names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    /// Privacy statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}

/// Bookkeeping about the analyzed content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Character count of the content
    pub content_length: usize,
    /// Number of claims reported
    pub claim_count: usize,
    /// Number of flags reported
    pub flag_count: usize,
    /// Nominal analysis duration in seconds
    pub analysis_time: f64,
}

/// Complete result of analyzing one piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique identifier
    pub id: AnalysisId,

    /// RFC 3339 creation time
    pub timestamp: String,

    /// Echoed source URL, `"N/A"` when absent
    pub url: String,

    /// Coarse content classification
    pub content_type: ContentType,

    /// Trust score in [0, 100]
    pub trust_score: u8,

    /// Label derived from `trust_score` unless overridden by a caller decision
    pub confidence_label: String,

    /// Extracted claims (never empty)
    pub claims: Vec<Claim>,

    /// Advisory flags
    pub flags: Vec<Flag>,

    /// Narrative explanation
    pub reasoning: Reasoning,

    /// Analyzer description
    pub agent_info: AgentInfo,

    /// Content bookkeeping
    pub metadata: ContentMetadata,

    /// Summary supplied by an external decision maker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_summary: Option<String>,

    /// Decision supplied by an external decision maker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_decision: Option<String>,
}
