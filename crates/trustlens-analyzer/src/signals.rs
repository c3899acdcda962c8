//! Signal extraction from raw content and source URL

use crate::lexicon::{
    contains_any, count_present, BLOG_PLATFORMS, CAPS_WORD_RE, EMOTIONAL_WORDS,
    HIGH_REPUTATION_DOMAINS, MODERATE_REPUTATION_KEYWORDS, MULTI_EXCLAMATION_RE,
    SOCIAL_MEDIA_DOMAINS, SOURCE_INDICATORS, URL_SCHEME_RE,
};
use tracing::debug;
use trustlens_domain::SignalSet;

/// Reputation used when no URL is supplied
pub const NEUTRAL_REPUTATION: u8 = 50;
/// Institutional and established outlets
pub const HIGH_REPUTATION: u8 = 90;
/// Generic news hosts
pub const MODERATE_REPUTATION: u8 = 70;
/// Social platforms
pub const SOCIAL_REPUTATION: u8 = 30;
/// Blog platforms
pub const BLOG_REPUTATION: u8 = 50;
/// Any other host
pub const DEFAULT_REPUTATION: u8 = 60;

/// Cap on the source-presence signal
const MAX_SOURCE_PRESENCE: u32 = 10;

/// Compute every signal for one piece of content
///
/// The title is accepted so callers can pass the whole input through, but no
/// signal depends on it.
pub fn compute_signals(content: &str, url: &str, _title: &str) -> SignalSet {
    let content_lower = content.to_lowercase();
    let words: Vec<&str> = content.split_whitespace().collect();
    let word_count = words.len();

    let emotional_count = count_present(&content_lower, EMOTIONAL_WORDS);
    let emotional_density = emotional_count as f64 / (word_count as f64 / 100.0).max(1.0);

    let exclamation_count = content.matches('!').count();
    let question_count = content.matches('?').count();
    let multi_exclamation = MULTI_EXCLAMATION_RE.find_iter(content).count();
    let sensational_punctuation = exclamation_count as f64
        + multi_exclamation as f64 * 3.0
        + question_count as f64 * 0.5;

    let source_count = count_present(&content_lower, SOURCE_INDICATORS) as u32;
    let source_presence = (source_count * 2).min(MAX_SOURCE_PRESENCE);

    let caps_words = CAPS_WORD_RE.find_iter(content).count();
    let caps_ratio = if word_count > 0 {
        caps_words as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };

    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_word_chars as f64 / word_count.max(1) as f64;
    let readability = (100.0 - avg_word_length * 5.0).clamp(0.0, 100.0);

    let signals = SignalSet {
        emotional_density,
        sensational_punctuation,
        domain_reputation: domain_reputation(url),
        source_presence,
        content_length: content.chars().count(),
        caps_ratio,
        exclamation_count,
        question_count,
        url_count: URL_SCHEME_RE.find_iter(content).count(),
        readability,
    };

    debug!(?signals, "Computed content signals");
    signals
}

/// Heuristic reputation of the host in `url`
///
/// Categories overlap as substrings, so the checks run in a fixed order and the
/// first hit wins: high, moderate, social, blog, then the default.
pub fn domain_reputation(url: &str) -> u8 {
    if url.is_empty() {
        return NEUTRAL_REPUTATION;
    }

    let url_lower = url.to_lowercase();

    if contains_any(&url_lower, HIGH_REPUTATION_DOMAINS) {
        return HIGH_REPUTATION;
    }
    if contains_any(&url_lower, MODERATE_REPUTATION_KEYWORDS) {
        return MODERATE_REPUTATION;
    }
    if contains_any(&url_lower, SOCIAL_MEDIA_DOMAINS) {
        return SOCIAL_REPUTATION;
    }
    if contains_any(&url_lower, BLOG_PLATFORMS) {
        return BLOG_REPUTATION;
    }

    DEFAULT_REPUTATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_reputation_categories() {
        assert_eq!(domain_reputation(""), 50);
        assert_eq!(domain_reputation("https://www.nature.com/articles/1"), 90);
        assert_eq!(domain_reputation("https://cs.stanford.edu/page"), 90);
        assert_eq!(domain_reputation("https://dailyherald.example"), 70);
        assert_eq!(domain_reputation("https://facebook.com/x"), 30);
        assert_eq!(domain_reputation("https://someone.wordpress.org"), 50);
        assert_eq!(domain_reputation("https://example.org"), 60);
    }

    #[test]
    fn test_domain_reputation_priority() {
        // High reputation is checked before social media
        assert_eq!(domain_reputation("https://twitter.com/bbc.com"), 90);
        // "post" is a news keyword and wins over the blog list
        assert_eq!(domain_reputation("https://medium.com/post/1"), 70);
    }

    #[test]
    fn test_domain_reputation_is_case_insensitive() {
        assert_eq!(domain_reputation("HTTPS://REUTERS.COM/world"), 90);
    }

    #[test]
    fn test_emotional_density_counts_distinct_words() {
        // Repeats of one word count once; fewer than 100 words uses divisor 1
        let s = compute_signals("shocking shocking shocking viral", "", "");
        assert_eq!(s.emotional_density, 2.0);
    }

    #[test]
    fn test_emotional_words_match_inside_longer_words() {
        // "shockingly" contains "shocking", "viral-ish" contains "viral"
        let s = compute_signals("shockingly viral-ish", "", "");
        assert_eq!(s.emotional_density, 2.0);
    }

    #[test]
    fn test_emotional_density_scales_with_length() {
        let mut text = "word ".repeat(198);
        text.push_str("shocking viral");
        let s = compute_signals(&text, "", "");
        // 2 hits over 200 words
        assert!((s.emotional_density - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sensational_punctuation() {
        let s = compute_signals("Wow!! Really? Yes! No!!!", "", "");
        assert_eq!(s.exclamation_count, 6);
        assert_eq!(s.question_count, 1);
        // 6 + 3 * 2 runs + 0.5 * 1
        assert_eq!(s.sensational_punctuation, 12.5);
    }

    #[test]
    fn test_source_presence_is_capped() {
        let text = "according to a study, research, a report, source: http://a";
        let s = compute_signals(text, "", "");
        assert_eq!(s.source_presence, 10);

        let s = compute_signals("according to nobody", "", "");
        assert_eq!(s.source_presence, 2);
    }

    #[test]
    fn test_caps_ratio() {
        let s = compute_signals("THIS is VERY bad news", "", "");
        // 2 caps words out of 5
        assert!((s.caps_ratio - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_url_count_is_case_insensitive() {
        let s = compute_signals("see HTTP://a.com and https://b.org", "", "");
        assert_eq!(s.url_count, 2);
    }

    #[test]
    fn test_readability_and_length() {
        let s = compute_signals("abcd abcd", "", "");
        assert_eq!(s.content_length, 9);
        assert_eq!(s.readability, 80.0);
    }

    #[test]
    fn test_degenerate_input_has_no_division_by_zero() {
        let s = compute_signals("   ", "", "");
        assert_eq!(s.emotional_density, 0.0);
        assert_eq!(s.caps_ratio, 0.0);
        assert_eq!(s.readability, 100.0);
        assert_eq!(s.domain_reputation, NEUTRAL_REPUTATION);
    }

    #[test]
    fn test_content_length_counts_characters() {
        let s = compute_signals("héllo", "", "");
        assert_eq!(s.content_length, 5);
    }
}
