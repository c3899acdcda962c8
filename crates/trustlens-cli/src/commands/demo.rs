//! Demo command implementation.

use crate::error::Result;
use crate::output::Formatter;
use trustlens_agent::{Agent, AgentReport};
use trustlens_domain::AnalysisInput;

/// A built-in sample input.
pub struct Sample {
    /// Page title
    pub title: &'static str,
    /// Source URL
    pub url: &'static str,
    /// Content text
    pub content: &'static str,
}

/// Institutional study, sensational social post, social photo claim.
pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "Harvard Study Shows Medical Breakthrough",
        url: "https://news.harvard.edu/gazette/story/study",
        content: "A recent study from Harvard Medical School shows significant results in medical research. According to researchers, the findings demonstrate clear benefits. The research was published in a peer-reviewed journal.",
    },
    Sample {
        title: "Shocking Discovery",
        url: "https://facebook.com/posts/123",
        content: "SHOCKING!!! You won't believe what they found!!! This secret will change everything!!! Click now before it's too late!!!",
    },
    Sample {
        title: "Rally Photo",
        url: "https://twitter.com/user/status/123",
        content: "This photo shows what happened yesterday at the rally. The image proves that thousands attended.",
    },
];

/// Execute the demo command.
pub fn execute_demo(agent: &Agent, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_reports(&run_demo(agent))?);
    Ok(())
}

/// Analyze every sample, keyed by its title.
pub fn run_demo(agent: &Agent) -> Vec<(String, AgentReport)> {
    SAMPLES
        .iter()
        .map(|sample| {
            let input = AnalysisInput::new(sample.content)
                .with_url(sample.url)
                .with_title(sample.title);
            (sample.title.to_string(), agent.analyze(&input, None))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scores() {
        let agent = Agent::new();
        let reports = run_demo(&agent);

        let scores: Vec<u8> = reports.iter().map(|(_, r)| r.result.trust_score).collect();
        assert_eq!(scores, vec![99, 13, 15]);
        assert_eq!(reports[0].0, "Harvard Study Shows Medical Breakthrough");
        assert_eq!(agent.evaluator().len(), 3);
    }
}
