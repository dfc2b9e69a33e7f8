//! Implementation of the `issue-graph relations` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::{ensure_relation_table, RelationTableOutcome};

#[derive(Args, Debug, Default)]
pub struct RelationsArgs {
    /// Issue log to read (defaults to the configured issue log)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Relation table to create if absent (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
pub struct RelationsOutput {
    pub success: bool,
    pub input: PathBuf,
    pub outcome: RelationTableOutcome,
}

impl CommandOutput for RelationsOutput {
    fn to_human(&self) -> String {
        match &self.outcome {
            RelationTableOutcome::Created { path, issues } => format!(
                "Relation table written to {} ({issues} issues from {}).",
                path.display(),
                self.input.display()
            ),
            RelationTableOutcome::AlreadyExists { path } => {
                format!("{} already exists. Skipping creation.", path.display())
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RelationsArgs, config: Config, json_mode: bool) -> Result<()> {
    let input = args.input.unwrap_or(config.output.issue_log_path);
    let target = args.output.unwrap_or(config.output.relations_path);

    let outcome = ensure_relation_table(&input, &target).with_context(|| {
        format!("Failed to build relation table from {}", input.display())
    })?;

    output(
        &RelationsOutput {
            success: true,
            input,
            outcome,
        },
        json_mode,
    );
    Ok(())
}
