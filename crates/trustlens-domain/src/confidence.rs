//! Confidence bands derived from the trust score

/// Four-band classification of a trust score
///
/// - High: 80 and above
/// - Moderate: 60 to 79
/// - Low: 40 to 59
/// - VeryLow: below 40
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceBand {
    /// Score ≥ 80
    High,
    /// Score ≥ 60
    Moderate,
    /// Score ≥ 40
    Low,
    /// Score < 40
    VeryLow,
}

impl ConfidenceBand {
    /// Classify a trust score
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ConfidenceBand::High
        } else if score >= 60 {
            ConfidenceBand::Moderate
        } else if score >= 40 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::VeryLow
        }
    }

    /// Title-case label used for the result's `confidence_label`
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High Confidence",
            ConfidenceBand::Moderate => "Moderate Confidence",
            ConfidenceBand::Low => "Low Confidence",
            ConfidenceBand::VeryLow => "Very Low Confidence",
        }
    }

    /// Sentence-case label used inside reasoning text
    pub fn trust_label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High confidence",
            ConfidenceBand::Moderate => "Moderate confidence",
            ConfidenceBand::Low => "Low confidence",
            ConfidenceBand::VeryLow => "Very low confidence",
        }
    }
}

/// Confidence label for a trust score, e.g. `"Moderate Confidence"`
pub fn confidence_label(score: u8) -> &'static str {
    ConfidenceBand::from_score(score).label()
}

/// Descriptive trust label for a trust score, e.g. `"Moderate confidence"`
pub fn trust_label(score: u8) -> &'static str {
    ConfidenceBand::from_score(score).trust_label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ConfidenceBand::from_score(100), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_score(80), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_score(79), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_score(60), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_score(59), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_score(40), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_score(39), ConfidenceBand::VeryLow);
        assert_eq!(ConfidenceBand::from_score(0), ConfidenceBand::VeryLow);
    }

    #[test]
    fn test_labels() {
        assert_eq!(confidence_label(85), "High Confidence");
        assert_eq!(confidence_label(10), "Very Low Confidence");
        assert_eq!(trust_label(65), "Moderate confidence");
        assert_eq!(trust_label(45), "Low confidence");
    }
}
