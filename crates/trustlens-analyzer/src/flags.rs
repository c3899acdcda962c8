//! Advisory flag generation
//!
//! Each rule is an independent threshold check over the signals. Rules are
//! evaluated in a fixed order and every rule that holds contributes its flag.

use trustlens_domain::{Flag, FlagType, SignalSet};

/// Static text of one flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTemplate {
    /// Severity
    pub flag_type: FlagType,
    /// Category name
    pub category: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Advice for the reader
    pub details: &'static str,
}

impl FlagTemplate {
    /// Build an owned flag from this template
    pub fn to_flag(&self) -> Flag {
        Flag::new(self.flag_type, self.category, self.description, self.details)
    }
}

/// High emotional density
pub const EMOTIONAL_LANGUAGE: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Warning,
    category: "Emotional Language",
    description: "High density of emotional or sensational language detected",
    details: "Content uses emotionally charged words that may bias perception. Consider seeking additional neutral sources.",
};

/// Many exclamation marks
pub const SENSATIONAL_PRESENTATION: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Warning,
    category: "Sensational Presentation",
    description: "Excessive use of exclamation marks detected",
    details: "Multiple exclamation marks often indicate sensationalism rather than factual reporting.",
};

/// Many all-caps words
pub const FORMATTING_CONCERNS: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Warning,
    category: "Formatting Concerns",
    description: "Excessive use of all-caps text detected",
    details: "Heavy use of capitalization can indicate emotional appeals or lack of editorial standards.",
};

/// Few source indicators
pub const LIMITED_SOURCE_ATTRIBUTION: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Info,
    category: "Limited Source Attribution",
    description: "Few external sources or references found",
    details: "Content lacks clear attribution to external sources or research. Claims may be difficult to verify independently.",
};

/// Low-reputation host
pub const SOCIAL_MEDIA_CONTENT: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Info,
    category: "Social Media Content",
    description: "Content from social media or user-generated platform",
    details: "Social media content has less editorial oversight. Verify claims through multiple independent sources.",
};

/// High-reputation host
pub const REPUTABLE_SOURCE: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Info,
    category: "Reputable Source",
    description: "Content from established institutional or news source",
    details: "Source has established editorial standards and fact-checking processes.",
};

/// Very short content
pub const MINIMAL_CONTEXT: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Warning,
    category: "Minimal Context",
    description: "Very brief content with limited detail",
    details: "Short content may lack necessary context for understanding claims. Seek additional information.",
};

/// Many source indicators
pub const WELL_REFERENCED: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Info,
    category: "Well-Referenced",
    description: "Multiple sources or references cited",
    details: "Content includes references to external sources, enabling independent verification.",
};

/// Flag returned for empty input
pub const NO_CONTENT: FlagTemplate = FlagTemplate {
    flag_type: FlagType::Warning,
    category: "No Content",
    description: "No content available for analysis",
    details: "Please provide content to analyze.",
};

/// Generate flags for a set of signals
///
/// `content` is only consulted for a literal `"!!!"`.
pub fn generate_flags(signals: &SignalSet, content: &str) -> Vec<Flag> {
    let rules: [(bool, &FlagTemplate); 8] = [
        (signals.emotional_density > 2.0, &EMOTIONAL_LANGUAGE),
        (
            signals.exclamation_count > 5 || content.contains("!!!"),
            &SENSATIONAL_PRESENTATION,
        ),
        (signals.caps_ratio > 5.0, &FORMATTING_CONCERNS),
        (signals.source_presence < 2, &LIMITED_SOURCE_ATTRIBUTION),
        (signals.domain_reputation < 40, &SOCIAL_MEDIA_CONTENT),
        (signals.domain_reputation > 85, &REPUTABLE_SOURCE),
        (signals.content_length < 200, &MINIMAL_CONTEXT),
        (signals.source_presence >= 5, &WELL_REFERENCED),
    ];

    rules
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, template)| template.to_flag())
        .collect()
}
