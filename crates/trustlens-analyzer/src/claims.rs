//! Rule-based claim extraction
//!
//! Sentences are taken in document order and the first few that contain an
//! assertion verb become claims. Selection is greedy: once the cap is reached
//! the remaining sentences are never looked at, so reordering a text can change
//! which claims are kept.

use crate::config::AnalyzerConfig;
use crate::lexicon::{
    contains_any, ABSOLUTE_WORDS, ATTRIBUTION_PHRASES, CLAIM_VERB_RE,
    CONFIDENCE_SENSATIONAL_WORDS, HEDGE_WORDS, SENTENCE_SPLIT_RE, STATUS_SENSATIONAL_WORDS,
    STRONG_WORDS,
};
use tracing::debug;
use trustlens_domain::{Claim, ClaimStatus};

/// Text of the placeholder claim emitted when nothing qualifies
pub const NO_CLAIMS_TEXT: &str =
    "Content contains general information without specific factual claims";

/// Reasoning of the placeholder claim
pub const NO_CLAIMS_REASONING: &str = "No specific verifiable claims detected in content";

const BASE_CONFIDENCE: i32 = 50;
const SOURCED_BONUS: i32 = 25;
const SENSATIONAL_PENALTY: i32 = 20;
const ABSOLUTE_PENALTY: i32 = 15;

/// Extract up to `config.max_claims` claims from `content`
///
/// Never returns an empty list: when no sentence qualifies a single
/// placeholder claim is returned instead.
pub fn extract_claims(content: &str, config: &AnalyzerConfig) -> Vec<Claim> {
    let mut claims = Vec::new();

    for sentence in split_sentences(content, config) {
        if claims.len() >= config.max_claims {
            break;
        }

        let sentence_lower = sentence.to_lowercase();
        if !CLAIM_VERB_RE.is_match(&sentence_lower) {
            continue;
        }

        let status = determine_status(&sentence_lower);
        let confidence = claim_confidence(&sentence_lower);
        let id = claims.len() as u32 + 1;

        debug!(id, %status, confidence, "Accepted claim sentence");

        claims.push(Claim::new(
            id,
            truncate_chars(sentence, config.claim_text_limit),
            status,
            confidence,
            detect_sources(&sentence_lower),
            claim_reasoning(status),
        ));
    }

    if claims.is_empty() {
        claims.push(Claim::new(
            1,
            NO_CLAIMS_TEXT,
            ClaimStatus::Unverified,
            BASE_CONFIDENCE as u8,
            Vec::new(),
            NO_CLAIMS_REASONING,
        ));
    }

    claims
}

/// Split on runs of `.`, `!` or `?` and keep trimmed sentences whose length
/// lies strictly between the configured bounds
pub fn split_sentences<'a>(content: &'a str, config: &AnalyzerConfig) -> Vec<&'a str> {
    SENTENCE_SPLIT_RE
        .split(content)
        .map(str::trim)
        .filter(|s| {
            let len = s.chars().count();
            len > config.min_sentence_chars && len < config.max_sentence_chars
        })
        .collect()
}

/// Status of a lower-cased sentence; the first matching rule wins
pub fn determine_status(sentence: &str) -> ClaimStatus {
    let has_hedging = contains_any(sentence, HEDGE_WORDS);
    let has_strong = contains_any(sentence, STRONG_WORDS);

    if contains_any(sentence, STATUS_SENSATIONAL_WORDS) {
        return ClaimStatus::Misleading;
    }
    if has_strong && !has_hedging {
        return ClaimStatus::Disputed;
    }
    if has_hedging {
        return ClaimStatus::Unverified;
    }
    if contains_any(sentence, ATTRIBUTION_PHRASES) {
        return ClaimStatus::Verified;
    }

    ClaimStatus::Unverified
}

/// Confidence (0-100) of a lower-cased sentence; adjustments stack
pub fn claim_confidence(sentence: &str) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if contains_any(sentence, ATTRIBUTION_PHRASES) {
        confidence += SOURCED_BONUS;
    }
    if contains_any(sentence, CONFIDENCE_SENSATIONAL_WORDS) {
        confidence -= SENSATIONAL_PENALTY;
    }
    if contains_any(sentence, ABSOLUTE_WORDS) {
        confidence -= ABSOLUTE_PENALTY;
    }

    confidence.clamp(0, 100) as u8
}

/// Descriptions of the kinds of sources a lower-cased sentence mentions
pub fn detect_sources(sentence: &str) -> Vec<String> {
    let mut sources = Vec::new();

    if sentence.contains("study") {
        sources.push("Research study (specific source not verified)".to_string());
    }
    if sentence.contains("research") {
        sources.push("Research publication (specific source not verified)".to_string());
    }
    if sentence.contains("according to") {
        sources.push("Attributed source (verification needed)".to_string());
    }
    if sentence.contains("expert") || sentence.contains("professor") {
        sources.push("Expert opinion (credentials not verified)".to_string());
    }

    sources
}

/// Fixed explanation for a status
pub fn claim_reasoning(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Verified => {
            "Claim includes attribution and appears to reference verifiable sources"
        }
        ClaimStatus::Unverified => "Claim lacks clear attribution or verifiable sources",
        ClaimStatus::Disputed => "Claim uses strong assertions without adequate evidence",
        ClaimStatus::Misleading => "Claim contains sensational language that may distort facts",
    }
}

fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    #[test]
    fn test_split_sentences_bounds() {
        let text = "Too short. This sentence is long enough to count!!! Another one that also qualifies?";
        let sentences = split_sentences(text, &config());
        assert_eq!(
            sentences,
            vec![
                "This sentence is long enough to count",
                "Another one that also qualifies"
            ]
        );
    }

    #[test]
    fn test_split_sentences_excludes_exact_bounds() {
        let twenty = "a".repeat(20);
        let twenty_one = "b".repeat(21);
        let text = format!("{}. {}.", twenty, twenty_one);
        let sentences = split_sentences(&text, &config());
        assert_eq!(sentences, vec![twenty_one.as_str()]);

        let long = "c".repeat(300);
        assert!(split_sentences(&long, &config()).is_empty());
    }

    #[test]
    fn test_status_priority() {
        // Sensational beats everything
        assert_eq!(
            determine_status("a shocking study definitely shows it"),
            ClaimStatus::Misleading
        );
        // Strong without hedge
        assert_eq!(determine_status("this is definitely true"), ClaimStatus::Disputed);
        // Strong with hedge falls through to hedge
        assert_eq!(determine_status("this might definitely be true"), ClaimStatus::Unverified);
        // Attribution
        assert_eq!(determine_status("according to officials it was late"), ClaimStatus::Verified);
        // Nothing
        assert_eq!(determine_status("the sky was blue today"), ClaimStatus::Unverified);
    }

    #[test]
    fn test_hedge_words_match_as_substrings() {
        // "mayor" contains "may"
        assert_eq!(
            determine_status("the mayor said research was done"),
            ClaimStatus::Unverified
        );
    }

    #[test]
    fn test_confidence_adjustments_stack() {
        assert_eq!(claim_confidence("plain sentence"), 50);
        assert_eq!(claim_confidence("a study shows"), 75);
        assert_eq!(claim_confidence("an amazing study"), 55);
        assert_eq!(claim_confidence("absolutely amazing"), 15);
        assert_eq!(claim_confidence("research is definitely amazing"), 40);
    }

    #[test]
    fn test_detect_sources_order() {
        let sources = detect_sources("according to a professor, the study and research agree");
        assert_eq!(
            sources,
            vec![
                "Research study (specific source not verified)",
                "Research publication (specific source not verified)",
                "Attributed source (verification needed)",
                "Expert opinion (credentials not verified)",
            ]
        );
        assert!(detect_sources("nothing cited").is_empty());
    }

    #[test]
    fn test_extract_claims_caps_at_three_in_order() {
        let text = "The first sentence is a claim here. The second sentence is a claim here. \
                    The third sentence is a claim here. The fourth sentence is a claim here.";
        let claims = extract_claims(text, &config());
        assert_eq!(claims.len(), 3);
        assert_eq!(claims[0].id, 1);
        assert_eq!(claims[2].id, 3);
        assert!(claims[0].text.starts_with("The first"));
        assert!(claims[2].text.starts_with("The third"));
    }

    #[test]
    fn test_extract_claims_is_order_dependent() {
        let a = "The first sentence is a claim here";
        let b = "The second sentence is a claim here";
        let c = "The third sentence is a claim here";
        let d = "The fourth sentence is a claim here";
        let forward = extract_claims(&format!("{a}. {b}. {c}. {d}."), &config());
        let reversed = extract_claims(&format!("{d}. {c}. {b}. {a}."), &config());
        assert_ne!(forward[0].text, reversed[0].text);
        assert!(reversed.iter().all(|c| c.text != a));
    }

    #[test]
    fn test_extract_claims_skips_sentences_without_verbs() {
        let text = "Lovely weather for a walk in the park today. Researchers found a new species of frog.";
        let claims = extract_claims(text, &config());
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "Researchers found a new species of frog");
        assert_eq!(claims[0].status, ClaimStatus::Verified);
        assert_eq!(claims[0].confidence, 75);
    }

    #[test]
    fn test_extract_claims_placeholder() {
        let claims = extract_claims("Hello there.", &config());
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].id, 1);
        assert_eq!(claims[0].text, NO_CLAIMS_TEXT);
        assert_eq!(claims[0].status, ClaimStatus::Unverified);
        assert_eq!(claims[0].confidence, 50);
        assert!(claims[0].sources.is_empty());
    }

    #[test]
    fn test_claim_text_is_truncated() {
        let sentence = format!("This is {}", "x".repeat(250));
        let claims = extract_claims(&sentence, &config());
        assert_eq!(claims[0].text.chars().count(), 200);
    }

    #[test]
    fn test_claim_reasoning_templates() {
        assert_eq!(
            claim_reasoning(ClaimStatus::Disputed),
            "Claim uses strong assertions without adequate evidence"
        );
    }
}
