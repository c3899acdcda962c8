//! Trust score aggregation
//!
//! The score starts at the domain reputation and is adjusted by a fixed set of
//! additive terms, then clamped to `[0, 100]` and truncated. Every term is
//! applied; there is no early exit.

use trustlens_domain::SignalSet;

/// Points removed per unit of emotional density
pub const EMOTIONAL_WEIGHT: f64 = 10.0;
/// Sensational punctuation above this value is penalized
pub const PUNCTUATION_THRESHOLD: f64 = 5.0;
/// Largest punctuation penalty
pub const PUNCTUATION_PENALTY_CAP: f64 = 20.0;
/// Points added per unit of source presence
pub const SOURCE_WEIGHT: f64 = 1.5;
/// Caps ratio above this value is penalized
pub const CAPS_THRESHOLD: f64 = 5.0;
/// Points removed per unit of caps ratio
pub const CAPS_WEIGHT: f64 = 2.0;
/// Content shorter than this is penalized
pub const SHORT_CONTENT_CHARS: usize = 200;
/// Penalty for short content
pub const SHORT_CONTENT_PENALTY: f64 = 15.0;
/// Inclusive range of lengths that earn a bonus
pub const SUBSTANTIVE_LENGTH: std::ops::RangeInclusive<usize> = 500..=3000;
/// Bonus for substantive content
pub const SUBSTANTIVE_BONUS: f64 = 5.0;
/// Inclusive range of link counts that earn a bonus
pub const HEALTHY_LINKS: std::ops::RangeInclusive<usize> = 2..=10;
/// Bonus for healthy linking, and penalty for link spam
pub const LINK_ADJUSTMENT: f64 = 5.0;

/// Compute the trust score for a set of signals
pub fn compute_trust_score(signals: &SignalSet) -> u8 {
    let mut score = f64::from(signals.domain_reputation);

    score -= signals.emotional_density * EMOTIONAL_WEIGHT;

    if signals.sensational_punctuation > PUNCTUATION_THRESHOLD {
        score -= signals.sensational_punctuation.min(PUNCTUATION_PENALTY_CAP);
    }

    score += f64::from(signals.source_presence) * SOURCE_WEIGHT;

    if signals.caps_ratio > CAPS_THRESHOLD {
        score -= signals.caps_ratio * CAPS_WEIGHT;
    }

    if signals.content_length < SHORT_CONTENT_CHARS {
        score -= SHORT_CONTENT_PENALTY;
    } else if SUBSTANTIVE_LENGTH.contains(&signals.content_length) {
        score += SUBSTANTIVE_BONUS;
    }

    if HEALTHY_LINKS.contains(&signals.url_count) {
        score += LINK_ADJUSTMENT;
    } else if signals.url_count > *HEALTHY_LINKS.end() {
        score -= LINK_ADJUSTMENT;
    }

    // Clamped values are non-negative, so truncation equals floor
    score.clamp(0.0, 100.0) as u8
}
