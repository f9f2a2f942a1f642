//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edgestack - declarative CloudFront stack synthesizer.
#[derive(Parser, Debug)]
#[command(name = "edgestack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the context file.
    #[arg(short, long, global = true, env = "EDGESTACK_CONTEXT")]
    pub context: Option<PathBuf>,

    /// Environment name to synthesize for.
    #[arg(short, long, global = true, env = "EDGESTACK_ENV")]
    pub environment: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new edgestack project.
    Init {
        /// Directory to initialize (defaults to current directory).
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Force overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the selected environment configuration.
    Validate {
        /// Show all warnings, not just errors.
        #[arg(short, long)]
        warnings: bool,
    },

    /// Synthesize a stack template.
    Synth {
        /// Which stack to synthesize.
        #[arg(long, default_value = "ec2")]
        stack: StackKind,

        /// Output directory for the template file.
        #[arg(short, long, default_value = "edgestack.out")]
        out: PathBuf,
    },

    /// List environments defined in the context file.
    Envs,
}

/// Selectable stack builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StackKind {
    /// Distribution fronting a fixed network origin.
    Ec2,
    /// Distribution fronting a content bucket.
    S3,
}

impl StackKind {
    /// Returns the stack name for an environment resource name.
    #[must_use]
    pub fn stack_name(self, resource_name: &str) -> String {
        match self {
            Self::Ec2 => format!("{resource_name}-ec2"),
            Self::S3 => format!("{resource_name}-s3"),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_names() {
        assert_eq!(StackKind::Ec2.stack_name("web-prod"), "web-prod-ec2");
        assert_eq!(StackKind::S3.stack_name("web-prod"), "web-prod-s3");
    }
}
