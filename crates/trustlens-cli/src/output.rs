//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use trustlens_agent::{AgentConfig, AgentReport};
use trustlens_domain::{ClaimStatus, ConfidenceBand, Flag, FlagType};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one agent report.
    pub fn format_report(&self, report: &AgentReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.result.trust_score.to_string()),
        }
    }

    /// Format several reports, one JSON array in JSON mode.
    pub fn format_reports(&self, reports: &[(String, AgentReport)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let bare: Vec<&AgentReport> = reports.iter().map(|(_, r)| r).collect();
                Ok(serde_json::to_string_pretty(&bare)?)
            }
            OutputFormat::Table => {
                let sections: Vec<String> = reports
                    .iter()
                    .map(|(title, report)| {
                        format!("{}\n{}", self.info(title), self.format_report_table(report))
                    })
                    .collect();
                Ok(sections.join("\n\n"))
            }
            OutputFormat::Quiet => {
                let scores: Vec<String> = reports
                    .iter()
                    .map(|(_, r)| r.result.trust_score.to_string())
                    .collect();
                Ok(scores.join("\n"))
            }
        }
    }

    /// Format the agent configuration.
    pub fn format_agent_config(&self, config: &AgentConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Quiet => Ok(format!("{} {}", config.model, config.version)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Setting", "Value"]);
                builder.push_record(["Model".to_string(), config.model.clone()]);
                builder.push_record(["Version".to_string(), config.version.clone()]);
                builder.push_record(["Mode".to_string(), config.mode.clone()]);
                builder.push_record(["Capabilities".to_string(), config.capabilities.join(", ")]);
                builder.push_record(["Approach".to_string(), config.approach.clone()]);
                builder.push_record(["Privacy".to_string(), config.privacy.clone()]);
                builder.push_record([
                    "Inference".to_string(),
                    config.evaluation.inference_mode.clone(),
                ]);
                Ok(self.styled(builder))
            }
        }
    }

    /// Render a report as score line, claims table, flags table and summary.
    fn format_report_table(&self, report: &AgentReport) -> String {
        let result = &report.result;
        let mut out = Vec::new();

        out.push(format!(
            "Trust score: {} ({})",
            self.colorize_score(result.trust_score),
            result.confidence_label
        ));
        out.push(format!(
            "Source: {}  Type: {}  Consistency: {:.1}",
            result.url, result.content_type, report.evaluation.consistency_score
        ));

        let mut claims = Builder::default();
        claims.push_record(["#", "Status", "Confidence", "Claim"]);
        for claim in &result.claims {
            claims.push_record([
                claim.id.to_string(),
                self.colorize_status(claim.status),
                format!("{}%", claim.confidence),
                claim.text.clone(),
            ]);
        }
        out.push(self.styled(claims));

        if result.flags.is_empty() {
            out.push(self.success("No flags raised."));
        } else {
            let mut flags = Builder::default();
            flags.push_record(["Type", "Category", "Description"]);
            for flag in &result.flags {
                flags.push_record([
                    self.colorize_flag_type(flag),
                    flag.category.clone(),
                    flag.description.clone(),
                ]);
            }
            out.push(self.styled(flags));
        }

        out.push(result.reasoning.summary.clone());
        if let Some(summary) = &result.agent_summary {
            out.push(self.info(&format!("Reviewer: {}", summary)));
        }

        out.join("\n")
    }

    fn styled(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn colorize_score(&self, score: u8) -> String {
        let color = match ConfidenceBand::from_score(score) {
            ConfidenceBand::High => "green",
            ConfidenceBand::Moderate => "cyan",
            ConfidenceBand::Low => "yellow",
            ConfidenceBand::VeryLow => "red",
        };
        self.colorize(&score.to_string(), color)
    }

    fn colorize_status(&self, status: ClaimStatus) -> String {
        let color = match status {
            ClaimStatus::Verified => "green",
            ClaimStatus::Unverified => "yellow",
            ClaimStatus::Disputed => "magenta",
            ClaimStatus::Misleading => "red",
        };
        self.colorize(status.as_str(), color)
    }

    fn colorize_flag_type(&self, flag: &Flag) -> String {
        match flag.flag_type {
            FlagType::Warning => self.warning(flag.flag_type.as_str()),
            FlagType::Info => self.info(flag.flag_type.as_str()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
