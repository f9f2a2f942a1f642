//! CLI module for the edgestack tool.
//!
//! This module provides the command-line interface for validating
//! environment configurations and synthesizing stack templates.

mod commands;
mod output;

pub use commands::{Cli, Commands, OutputFormat, StackKind};
pub use output::{OutputFormatter, OutputSummary, ResourceSummary, SynthSummary};
