//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::export::ExportArgs;
use super::commands::refs::RefsArgs;
use super::commands::relations::RelationsArgs;

#[derive(Parser, Debug)]
#[command(name = "issue-graph")]
#[command(about = "Export GitHub issues and comments to CSV and build an issue cross-reference table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (replaces .issue-graph/config.yaml and local.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch issues and comments, write the issue log and relation table
    Export(ExportArgs),

    /// Build the relation table from an existing issue log
    Relations(RelationsArgs),

    /// Print the issue references found in a piece of text
    Refs(RefsArgs),
}
