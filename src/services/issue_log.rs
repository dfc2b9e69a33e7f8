//! The issue/comment log: one CSV row per issue body and per retained
//! comment.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Issue, LogRow};

use super::comment_fetcher::CommentFetcher;
use super::relation_extractor::RelationExtractor;

/// Row-oriented CSV writer for the issue log.
///
/// The header is written on construction, so even an empty export
/// produces a readable file.
pub struct IssueLogWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl IssueLogWriter<File> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> DomainResult<Self> {
        let file = File::create(path.as_ref())?;
        Self::from_writer(file)
    }
}

impl<W: Write> IssueLogWriter<W> {
    pub fn from_writer(inner: W) -> DomainResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(LogRow::HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &LogRow) -> DomainResult<()> {
        self.writer.serialize(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Push buffered rows to the underlying writer.
    pub fn flush(&mut self) -> DomainResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Data rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> DomainResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| DomainError::Io(e.into_error()))
    }
}

/// Counts from one log export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueLogSummary {
    pub issues: usize,
    pub comments: usize,
}

impl IssueLogSummary {
    /// Data rows in the log: one per issue plus one per comment.
    pub const fn rows(&self) -> usize {
        self.issues + self.comments
    }
}

/// Write `issues` and their human comments to `writer`.
///
/// Comments are fetched per issue, after that issue's own row, in issue
/// order. Output is flushed after every issue so an aborted run leaves
/// whole issues on disk.
pub async fn write_issue_log<W: Write>(
    writer: &mut IssueLogWriter<W>,
    issues: &[Issue],
    comments: &CommentFetcher,
    extractor: &RelationExtractor,
    progress: &ProgressBar,
) -> DomainResult<IssueLogSummary> {
    let mut summary = IssueLogSummary::default();

    for issue in issues {
        progress.set_message(format!("#{}", issue.number));

        let row = LogRow::for_issue(issue);
        let relations = extractor.extract(Some(&row.comment_body));
        writer.write_row(&row.with_relations(relations))?;
        summary.issues += 1;

        let retained = comments.fetch_human_comments(issue.number).await?;
        for comment in &retained {
            let row = LogRow::for_comment(issue, comment);
            let relations = extractor.extract(Some(&row.comment_body));
            writer.write_row(&row.with_relations(relations))?;
        }
        summary.comments += retained.len();
        debug!(issue_number = issue.number, comments = retained.len(), "issue logged");

        writer.flush()?;
        progress.inc(1);
    }

    Ok(summary)
}

/// Create the log file at `path` and fill it via [`write_issue_log`].
pub async fn export_issue_log(
    path: &Path,
    issues: &[Issue],
    comments: &CommentFetcher,
    extractor: &RelationExtractor,
    progress: &ProgressBar,
) -> DomainResult<IssueLogSummary> {
    let mut writer = IssueLogWriter::create(path)?;
    let summary = write_issue_log(&mut writer, issues, comments, extractor, progress).await?;
    writer.finish()?;

    info!(
        path = %path.display(),
        issues = summary.issues,
        comments = summary.comments,
        "issue log written"
    );
    Ok(summary)
}
