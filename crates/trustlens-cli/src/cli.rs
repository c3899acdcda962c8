//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// TrustLens CLI - Score the credibility of text content.
#[derive(Debug, Parser)]
#[command(name = "trustlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TRUSTLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (trust score only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a piece of content
    Analyze(AnalyzeArgs),

    /// Print the agent configuration
    Agent,

    /// Analyze the built-in sample inputs
    Demo,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Content to analyze (read from stdin when neither this nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read content from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Source URL of the content
    #[arg(short, long)]
    pub url: Option<String>,

    /// Page title of the content
    #[arg(short, long)]
    pub title: Option<String>,

    /// Reviewer decision as JSON, e.g. '{"summary": "...", "decision": "..."}'
    #[arg(short, long)]
    pub decision: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "trustlens",
            "analyze",
            "Some text to check",
            "--url",
            "https://example.com",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.text.as_deref(), Some("Some text to check"));
                assert_eq!(args.url.as_deref(), Some("https://example.com"));
                assert!(args.file.is_none());
                assert!(args.decision.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result =
            Cli::try_parse_from(["trustlens", "analyze", "text", "--file", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["trustlens", "demo", "--format", "json", "--no-color", "-vv"]);
        assert!(matches!(cli.command, Command::Demo));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format.map(OutputFormat::from), Some(OutputFormat::Json)));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["trustlens"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
