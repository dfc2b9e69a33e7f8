//! Implementation of the `issue-graph refs` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::RelationExtractor;

#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Text to scan for `#123` and issue-link references
    pub text: String,
}

#[derive(Debug, serde::Serialize)]
pub struct RefsOutput {
    pub repository: String,
    pub references: Vec<String>,
    pub relations: String,
}

impl CommandOutput for RefsOutput {
    fn to_human(&self) -> String {
        if self.references.is_empty() {
            format!("No references to {} found.", self.repository)
        } else {
            self.relations.clone()
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RefsArgs, config: Config, json_mode: bool) -> Result<()> {
    let extractor =
        RelationExtractor::from_config(&config.github).context("Failed to build extractor")?;
    let references: Vec<String> = extractor
        .references(&args.text)
        .map(str::to_string)
        .collect();

    output(
        &RefsOutput {
            repository: config.github.slug(),
            relations: extractor.extract(Some(&args.text)),
            references,
        },
        json_mode,
    );
    Ok(())
}
