//! Signals derived from raw content

use serde::{Deserialize, Serialize};

/// Numeric features computed once per analysis and read by every later stage
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalSet {
    /// Emotional lexicon hits per hundred words (at least one hundred)
    pub emotional_density: f64,

    /// `!` count + 3 * runs of `!!` or longer + 0.5 * `?` count
    pub sensational_punctuation: f64,

    /// Heuristic reputation of the source URL (0-100, 50 when absent)
    pub domain_reputation: u8,

    /// 2 * distinct source indicators, capped at 10
    pub source_presence: u32,

    /// Character count of the content
    pub content_length: usize,

    /// Percentage of words that are runs of three or more capitals
    pub caps_ratio: f64,

    /// Raw `!` count
    pub exclamation_count: usize,

    /// Raw `?` count
    pub question_count: usize,

    /// Number of `http://` or `https://` occurrences
    pub url_count: usize,

    /// 100 - 5 * average word length, clamped to [0, 100]
    pub readability: f64,
}
