//! Implementation of the `issue-graph export` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;

use crate::adapters::GitHubClient;
use crate::cli::output::progress::create_progress_bar;
use crate::cli::output::table::summary_table;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::github_token_from_env;
use crate::services::{ExportSummary, IssueExporter, RelationTableOutcome};

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Repository to export, as owner/name
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Maximum number of issues to export (pull requests excluded)
    #[arg(long)]
    pub max_issues: Option<usize>,

    /// Items requested per API page (1-100)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Issue/comment log to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Relation table to create if absent
    #[arg(long, value_name = "FILE")]
    pub relations_output: Option<PathBuf>,

    /// Only fetch the first page of comments per issue
    #[arg(long)]
    pub no_comment_pagination: bool,
}

impl ExportArgs {
    /// Layer command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(slug) = &self.repo {
            let (owner, repo) = parse_repo_slug(slug)?;
            config.github.owner = owner;
            config.github.repo = repo;
        }
        if let Some(max_issues) = self.max_issues {
            config.fetch.max_issues = max_issues;
        }
        if let Some(page_size) = self.page_size {
            config.fetch.page_size = page_size;
        }
        if let Some(path) = &self.output {
            config.output.issue_log_path.clone_from(path);
        }
        if let Some(path) = &self.relations_output {
            config.output.relations_path.clone_from(path);
        }
        if self.no_comment_pagination {
            config.fetch.paginate_comments = false;
        }
        ConfigLoader::validate(config)?;
        Ok(())
    }
}

/// Split `owner/name` into its two parts.
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo))
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
        {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => anyhow::bail!("Invalid repository '{slug}': expected OWNER/NAME"),
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ExportOutput {
    pub success: bool,
    #[serde(flatten)]
    pub summary: ExportSummary,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        let s = &self.summary;
        let relation_status = match &s.relation_table {
            RelationTableOutcome::Created { path, issues } => {
                format!("created {} ({issues} issues)", path.display())
            }
            RelationTableOutcome::AlreadyExists { path } => {
                format!("{} already exists, skipped", path.display())
            }
        };
        let table = summary_table(&[
            ("Repository", s.repository.clone()),
            ("Issues", s.issues.to_string()),
            ("Comments", s.comments.to_string()),
            ("Log rows", s.log_rows().to_string()),
            ("Issue log", s.issue_log_path.display().to_string()),
            ("Relation table", relation_status),
        ]);
        format!("Export complete.\n{table}")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ExportArgs, mut config: Config, json_mode: bool) -> Result<()> {
    args.apply(&mut config)?;

    let client = GitHubClient::new(&config.github, github_token_from_env())
        .context("Failed to create GitHub client")?;
    let progress = if json_mode {
        ProgressBar::hidden()
    } else {
        create_progress_bar(0)
    };

    let exporter = IssueExporter::new(Arc::new(client), config)
        .context("Failed to set up export")?
        .with_progress(progress);
    let summary = exporter.run().await.context("Export failed")?;

    output(
        &ExportOutput {
            success: true,
            summary,
        },
        json_mode,
    );
    Ok(())
}
