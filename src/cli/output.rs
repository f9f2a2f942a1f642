//! Output formatting for CLI commands.
//!
//! This module provides formatting utilities for displaying synthesis
//! results and context information to the user in various formats.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use crate::config::ContextStore;
use crate::template::StackTemplate;

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Summary of one synthesis run.
#[derive(Debug, Serialize)]
pub struct SynthSummary {
    /// Name of the synthesized stack.
    pub stack_name: String,
    /// Environment the configuration was resolved from.
    pub environment: String,
    /// Target region.
    pub region: String,
    /// Target account, when known.
    pub account: Option<String>,
    /// When synthesis finished.
    pub synthesized_at: DateTime<Utc>,
    /// Where the template was written.
    pub template_path: PathBuf,
    /// Resources in the template.
    pub resources: Vec<ResourceSummary>,
    /// Outputs exposed by the template.
    pub outputs: Vec<OutputSummary>,
}

/// One resource row of a synthesis summary.
#[derive(Debug, Serialize, Tabled)]
pub struct ResourceSummary {
    /// Logical id.
    #[tabled(rename = "Logical ID")]
    pub logical_id: String,
    /// Resource type.
    #[tabled(rename = "Type")]
    pub resource_type: String,
}

/// One output row of a synthesis summary.
#[derive(Debug, Serialize, Tabled)]
pub struct OutputSummary {
    /// Output name.
    #[tabled(rename = "Output")]
    pub name: String,
    /// Output description.
    #[tabled(rename = "Description")]
    pub description: String,
}

/// Environment row for the `envs` listing.
#[derive(Tabled)]
struct EnvironmentRow {
    #[tabled(rename = "Environment")]
    name: String,
    #[tabled(rename = "Resource Name")]
    resource_name: String,
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Rules")]
    rules: usize,
    #[tabled(rename = "Behaviors")]
    behaviors: usize,
}

impl SynthSummary {
    /// Builds a summary from a synthesized template.
    #[must_use]
    pub fn from_template(
        template: &StackTemplate,
        environment: &str,
        region: &str,
        account: Option<String>,
        template_path: PathBuf,
    ) -> Self {
        Self {
            stack_name: template.stack_name().to_string(),
            environment: environment.to_string(),
            region: region.to_string(),
            account,
            synthesized_at: Utc::now(),
            template_path,
            resources: template
                .resources()
                .map(|(id, node)| ResourceSummary {
                    logical_id: id.to_string(),
                    resource_type: node.resource_type.clone(),
                })
                .collect(),
            outputs: template
                .outputs()
                .map(|(name, entry)| OutputSummary {
                    name: name.to_string(),
                    description: entry.description.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a synthesis summary for display.
    #[must_use]
    pub fn format_synth(&self, summary: &SynthSummary) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Text => Self::format_synth_text(summary),
        }
    }

    /// Formats a synthesis summary as text.
    fn format_synth_text(summary: &SynthSummary) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            "\n{} Synthesized stack {} (environment: {})\n",
            "✓".green(),
            summary.stack_name.bold(),
            summary.environment
        );
        let _ = write!(
            output,
            "   Region: {}  Account: {}\n\n",
            summary.region,
            summary.account.as_deref().unwrap_or("(unset)")
        );

        if !summary.resources.is_empty() {
            let table = Table::new(&summary.resources).to_string();
            output.push_str(&table);
            output.push('\n');
        }

        if !summary.outputs.is_empty() {
            output.push('\n');
            let table = Table::new(&summary.outputs).to_string();
            output.push_str(&table);
            output.push('\n');
        }

        let _ = write!(
            output,
            "\nTemplate written to: {}\n",
            summary.template_path.display()
        );

        output
    }

    /// Formats the environment listing for display.
    #[must_use]
    pub fn format_envs(&self, store: &ContextStore) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&store.environment_names()).unwrap_or_default()
            }
            OutputFormat::Text => Self::format_envs_text(store),
        }
    }

    /// Formats the environment listing as text.
    fn format_envs_text(store: &ContextStore) -> String {
        if store.is_empty() {
            return format!("{} No environments defined.\n", "!".yellow());
        }

        let rows: Vec<EnvironmentRow> = store
            .environments
            .iter()
            .map(|(name, config)| EnvironmentRow {
                name: name.clone(),
                resource_name: config.resource_name.clone(),
                origin: config.origin_domain.clone(),
                rules: config.managed_rules.len(),
                behaviors: config.behaviors.len(),
            })
            .collect();

        let mut output = Table::new(rows).to_string();
        output.push('\n');
        output
    }
}
