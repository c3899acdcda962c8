//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::io::Read;
use tracing::debug;
use trustlens_agent::{Agent, AgentDecision, AgentReport};
use trustlens_domain::AnalysisInput;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, agent: &Agent, formatter: &Formatter) -> Result<()> {
    let report = run_analyze(args, agent, std::io::stdin().lock())?;

    if report.result.metadata.content_length == 0 {
        eprintln!("{}", formatter.warning("No content supplied"));
    }
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Build the input, parse the decision and run the agent.
///
/// `stdin` is only read when neither inline text nor a file was given.
pub fn run_analyze(args: AnalyzeArgs, agent: &Agent, stdin: impl Read) -> Result<AgentReport> {
    let content = read_content(args.text, args.file.as_deref(), stdin)?;
    debug!(chars = content.chars().count(), "Read content");

    let mut input = AnalysisInput::new(content);
    if let Some(url) = args.url {
        input = input.with_url(url);
    }
    if let Some(title) = args.title {
        input = input.with_title(title);
    }

    let decision = args
        .decision
        .as_deref()
        .map(AgentDecision::from_json)
        .transpose()?;

    Ok(agent.analyze(&input, decision.as_ref()))
}

fn read_content(
    text: Option<String>,
    file: Option<&std::path::Path>,
    mut stdin: impl Read,
) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: None,
            file: None,
            url: None,
            title: None,
            decision: None,
        }
    }

    #[test]
    fn test_inline_text() {
        let agent = Agent::new();
        let args = AnalyzeArgs {
            text: Some("This photo shows what happened yesterday at the rally.".to_string()),
            url: Some("https://twitter.com/user/status/123".to_string()),
            ..args()
        };
        let report = run_analyze(args, &agent, Cursor::new("ignored")).unwrap();
        assert_eq!(report.result.url, "https://twitter.com/user/status/123");
        assert_eq!(report.result.claims.len(), 1);
    }

    #[test]
    fn test_stdin_trailing_newline_stripped() {
        let agent = Agent::new();
        let report = run_analyze(args(), &agent, Cursor::new("A short note.\n")).unwrap();
        assert_eq!(report.result.metadata.content_length, 13);
    }

    #[test]
    fn test_file_input() {
        use std::io::Write;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The committee was formed in the spring of last year.").unwrap();

        let agent = Agent::new();
        let args = AnalyzeArgs {
            file: Some(file.path().to_path_buf()),
            ..args()
        };
        let report = run_analyze(args, &agent, Cursor::new("")).unwrap();
        assert_eq!(report.result.claims[0].text, "The committee was formed in the spring of last year");
    }

    #[test]
    fn test_missing_file() {
        let agent = Agent::new();
        let args = AnalyzeArgs {
            file: Some("/nonexistent/trustlens/input.txt".into()),
            ..args()
        };
        assert!(matches!(
            run_analyze(args, &agent, Cursor::new("")),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn test_decision_applied() {
        let agent = Agent::new();
        let args = AnalyzeArgs {
            text: Some("A short note.".to_string()),
            decision: Some(r#"{"decision": "Rejected"}"#.to_string()),
            ..args()
        };
        let report = run_analyze(args, &agent, Cursor::new("")).unwrap();
        assert_eq!(report.result.confidence_label, "Rejected");
    }

    #[test]
    fn test_invalid_decision_json() {
        let agent = Agent::new();
        let args = AnalyzeArgs {
            text: Some("A short note.".to_string()),
            decision: Some("{not json".to_string()),
            ..args()
        };
        assert!(matches!(
            run_analyze(args, &agent, Cursor::new("")),
            Err(CliError::Agent(_))
        ));
    }

    #[test]
    fn test_empty_stdin() {
        let agent = Agent::new();
        let report = run_analyze(args(), &agent, Cursor::new("")).unwrap();
        assert_eq!(report.result.confidence_label, "No Analysis");
    }
}
