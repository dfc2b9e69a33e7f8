//! End-to-end export: fetch → log → relation table.

use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::Config;
use crate::domain::ports::IssueSource;

use super::comment_fetcher::CommentFetcher;
use super::issue_fetcher::IssueFetcher;
use super::issue_log::{export_issue_log, IssueLogSummary};
use super::relation_extractor::RelationExtractor;
use super::relation_table::{ensure_relation_table, RelationTableOutcome};

/// Result of one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub repository: String,
    pub issues: usize,
    pub comments: usize,
    pub issue_log_path: PathBuf,
    pub relation_table: RelationTableOutcome,
}

impl ExportSummary {
    /// Data rows written to the issue log.
    pub const fn log_rows(&self) -> usize {
        self.issues + self.comments
    }
}

/// Runs the whole pipeline against one issue source.
///
/// Strictly sequential: issues are fetched page by page, then each
/// issue's comments are fetched and logged in order. The first error
/// stops the run.
pub struct IssueExporter {
    config: Config,
    issues: IssueFetcher,
    comments: CommentFetcher,
    extractor: RelationExtractor,
    progress: ProgressBar,
}

impl IssueExporter {
    pub fn new(source: Arc<dyn IssueSource>, config: Config) -> DomainResult<Self> {
        let extractor = RelationExtractor::from_config(&config.github)?;
        Ok(Self {
            issues: IssueFetcher::from_config(source.clone(), &config.fetch),
            comments: CommentFetcher::from_config(source, &config.fetch),
            extractor,
            config,
            progress: ProgressBar::hidden(),
        })
    }

    /// Report per-issue progress on `progress`; its length is set once
    /// the issue list is known.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub async fn run(&self) -> DomainResult<ExportSummary> {
        let repository = self.config.github.slug();
        info!(
            repository = %repository,
            max_issues = self.config.fetch.max_issues,
            page_size = self.config.fetch.page_size,
            "starting issue export"
        );

        let issues = self.issues.fetch_latest().await?;
        info!(count = issues.len(), "issues fetched");

        self.progress.set_length(issues.len() as u64);
        let log_path = &self.config.output.issue_log_path;
        let log: IssueLogSummary = export_issue_log(
            log_path,
            &issues,
            &self.comments,
            &self.extractor,
            &self.progress,
        )
        .await?;
        self.progress.finish_and_clear();

        let relation_table = ensure_relation_table(log_path, &self.config.output.relations_path)?;

        Ok(ExportSummary {
            repository,
            issues: log.issues,
            comments: log.comments,
            issue_log_path: log_path.clone(),
            relation_table,
        })
    }
}
