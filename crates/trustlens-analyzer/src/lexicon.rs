//! Fixed word lists, domain lists and patterns used by the analysis stages
//!
//! Every list is matched against lower-cased text by plain substring
//! containment unless it is compiled into one of the regexes at the bottom.

use regex::Regex;
use std::sync::LazyLock;

/// Sensational or emotionally loaded words counted toward emotional density
pub const EMOTIONAL_WORDS: &[&str] = &[
    "shocking",
    "unbelievable",
    "incredible",
    "amazing",
    "terrible",
    "horrifying",
    "outrageous",
    "scandal",
    "explosive",
    "bombshell",
    "must-see",
    "viral",
    "breaking",
    "urgent",
    "crisis",
];

/// Phrases suggesting that the content cites something
pub const SOURCE_INDICATORS: &[&str] = &[
    "according to",
    "study",
    "research",
    "report",
    "source:",
    "http",
];

/// Hedging words that mark a sentence as uncertain
pub const HEDGE_WORDS: &[&str] = &[
    "may",
    "might",
    "could",
    "possibly",
    "allegedly",
    "reportedly",
    "supposedly",
];

/// Words asserting certainty
pub const STRONG_WORDS: &[&str] = &[
    "definitely",
    "absolutely",
    "certainly",
    "undoubtedly",
    "proven",
    "fact",
];

/// Sensational wording that marks a claim as misleading
pub const STATUS_SENSATIONAL_WORDS: &[&str] = &[
    "shocking",
    "unbelievable",
    "secret",
    "don't want you to know",
    "incredible",
];

/// Sensational wording that lowers claim confidence
pub const CONFIDENCE_SENSATIONAL_WORDS: &[&str] =
    &["shocking", "unbelievable", "incredible", "amazing"];

/// Attribution phrases that mark a claim as verified and raise its confidence
pub const ATTRIBUTION_PHRASES: &[&str] = &["according to", "study", "research"];

/// Absolute wording that lowers claim confidence
pub const ABSOLUTE_WORDS: &[&str] = &["definitely", "absolutely"];

/// Institutional and established outlets
pub const HIGH_REPUTATION_DOMAINS: &[&str] = &[
    ".edu",
    ".gov",
    ".ac.uk",
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "nature.com",
    "science.org",
    "npr.org",
];

/// Generic news keywords
pub const MODERATE_REPUTATION_KEYWORDS: &[&str] =
    &["news", "times", "post", "journal", "herald", "tribune"];

/// Social platforms
pub const SOCIAL_MEDIA_DOMAINS: &[&str] = &[
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "tiktok.com",
    "reddit.com",
];

/// Blog platforms
pub const BLOG_PLATFORMS: &[&str] = &["wordpress", "blogger", "medium.com", "substack"];

/// URL markers for social content classification
pub const SOCIAL_CONTENT_MARKERS: &[&str] = &["twitter", "facebook", "instagram", "tiktok", "reddit"];

/// URL markers for news content classification
pub const NEWS_CONTENT_MARKERS: &[&str] = &["news", "times", "post", "journal", "bbc", "cnn"];

/// Sentence terminators, one or more in sequence
pub static SENTENCE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Verbs that indicate a factual assertion (matched on lower-cased text)
pub static CLAIM_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(is|are|was|were|shows|proves|demonstrates|reveals|confirms|indicates|suggests|claims|states|reports|found|discovered)\b",
    )
    .unwrap()
});

/// Whole words of three or more capital letters (matched on original text)
pub static CAPS_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3,}\b").unwrap());

/// Runs of two or more exclamation marks
pub static MULTI_EXCLAMATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").unwrap());

/// Link schemes
pub static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://").unwrap());

/// True if `text` contains any of `words`
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Number of distinct entries of `words` contained in `text`
pub fn count_present(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(SENTENCE_SPLIT_RE.is_match("a."));
        assert!(CLAIM_VERB_RE.is_match("it is"));
        assert!(CAPS_WORD_RE.is_match("WOW"));
        assert!(MULTI_EXCLAMATION_RE.is_match("!!"));
        assert!(URL_SCHEME_RE.is_match("HTTPS://x"));
    }

    #[test]
    fn test_claim_verbs_respect_word_boundaries() {
        assert!(!CLAIM_VERB_RE.is_match("this island"));
        assert!(CLAIM_VERB_RE.is_match("the data shows growth"));
        assert!(!CLAIM_VERB_RE.is_match("showstopper"));
    }

    #[test]
    fn test_caps_words_need_three_letters() {
        assert_eq!(CAPS_WORD_RE.find_iter("OK NASA FBI Nasa").count(), 2);
    }

    #[test]
    fn test_substring_helpers() {
        assert!(contains_any("the mayor said", HEDGE_WORDS));
        assert_eq!(count_present("a study and some research", SOURCE_INDICATORS), 2);
        assert_eq!(count_present("nothing here", SOURCE_INDICATORS), 0);
    }
}
