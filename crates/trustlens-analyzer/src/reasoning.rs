//! Narrative reasoning built from signals, score and claim count

use trustlens_domain::{trust_label, Reasoning, ReasoningStep, SignalSet};

/// Fixed description of how every analysis is performed
pub const METHODOLOGY: &str = "This analysis uses rule-based heuristics including linguistic pattern matching, domain reputation scoring, and structural analysis. It does not rely on external APIs or AI models, making it fully deterministic and privacy-preserving.";

/// Closing sentence appended to every summary
pub const CLOSING_RECOMMENDATION: &str = "Always verify claims through multiple independent sources.";

/// Build the three-step reasoning for a completed analysis
pub fn generate_reasoning(signals: &SignalSet, trust_score: u8, claim_count: usize) -> Reasoning {
    let plural = if claim_count == 1 { "" } else { "s" };

    let steps = vec![
        ReasoningStep::new(
            1,
            "Content Extraction",
            "Analyzed text content and linguistic patterns",
            format!("Extracted {} verifiable claim{} from content", claim_count, plural),
        ),
        ReasoningStep::new(
            2,
            "Signal Analysis",
            "Evaluated multiple credibility indicators",
            signal_summary(signals),
        ),
        ReasoningStep::new(
            3,
            "Trust Score Calculation",
            "Computed weighted score from all signals",
            format!("Final trust score: {}/100 ({})", trust_score, trust_label(trust_score)),
        ),
    ];

    Reasoning {
        steps,
        summary: summary(signals, trust_score),
        methodology: METHODOLOGY.to_string(),
    }
}

/// Comma-separated description of the notable signals
pub fn signal_summary(signals: &SignalSet) -> String {
    let mut points = Vec::new();

    if signals.domain_reputation > 80 {
        points.push("High-reputation source");
    } else if signals.domain_reputation < 40 {
        points.push("Lower-reputation platform");
    }

    if signals.source_presence > 4 {
        points.push("Well-sourced");
    } else if signals.source_presence < 2 {
        points.push("Limited sourcing");
    }

    if signals.emotional_density > 2.0 {
        points.push("High emotional language");
    }

    if signals.sensational_punctuation > 5.0 {
        points.push("Sensational presentation");
    }

    if points.is_empty() {
        "Standard content patterns detected".to_string()
    } else {
        points.join(", ")
    }
}

/// Score-banded opening, specific concerns, then the closing recommendation
pub fn summary(signals: &SignalSet, trust_score: u8) -> String {
    let mut summary = String::from(match trust_score {
        75.. => "Content appears credible with good sourcing and minimal sensationalism. ",
        50..=74 => "Content has mixed credibility signals. Some concerns present but not definitively problematic. ",
        25..=49 => "Content shows multiple warning signs including sensational language or limited sourcing. ",
        _ => "Content exhibits significant credibility concerns. Exercise extreme caution. ",
    });

    if signals.emotional_density > 2.0 {
        summary.push_str("High emotional language detected. ");
    }
    if signals.source_presence < 2 {
        summary.push_str("Limited external source attribution. ");
    }
    if signals.domain_reputation < 40 {
        summary.push_str("Content from platform with limited editorial oversight. ");
    }

    summary.push_str(CLOSING_RECOMMENDATION);
    summary
}
