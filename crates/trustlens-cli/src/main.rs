//! TrustLens CLI - Command-line interface for the TrustLens content analyzer.

use anyhow::Context;
use clap::Parser;
use trustlens_agent::Agent;
use trustlens_cli::commands;
use trustlens_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    // Load config, falling back to defaults when no file exists
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let agent = Agent::with_config(config.analyzer_config())?;

    // Handle commands
    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &agent, &formatter)?,
        Command::Agent => commands::execute_agent(&agent, &formatter)?,
        Command::Demo => commands::execute_demo(&agent, &formatter)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Log to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
