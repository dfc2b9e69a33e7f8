//! Pipeline services: fetch issues and comments, extract cross-references,
//! write the issue log and derive the relation table from it.

pub mod comment_fetcher;
pub mod export_service;
pub mod issue_fetcher;
pub mod issue_log;
pub mod relation_extractor;
pub mod relation_table;

pub use comment_fetcher::CommentFetcher;
pub use export_service::{ExportSummary, IssueExporter};
pub use issue_fetcher::IssueFetcher;
pub use issue_log::{IssueLogSummary, IssueLogWriter};
pub use relation_extractor::RelationExtractor;
pub use relation_table::{ensure_relation_table, RelationTableOutcome};
