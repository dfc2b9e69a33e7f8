//! issue-graph - GitHub issue cross-reference exporter
//!
//! Fetches a repository's most recent issues and their human comments,
//! writes them to a flat CSV log, and derives an issue → related-issues
//! adjacency table from that log for graph-database import.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and the `IssueSource` port
//! - **Adapters** (`adapters`): GitHub REST client and an in-memory source
//! - **Service Layer** (`services`): fetching, relation extraction, CSV output
//! - **Infrastructure Layer** (`infrastructure`): config, logging, credentials
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use issue_graph::{Config, GitHubClient, IssueExporter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let client = GitHubClient::new(&config.github, None)?;
//!     let summary = IssueExporter::new(Arc::new(client), config)?.run().await?;
//!     println!("{} issues exported", summary.issues);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{GitHubClient, InMemoryIssueSource};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AuthorType, Comment, Config, FetchConfig, GitHubConfig, Issue, LogRow, LoggingConfig,
    OutputConfig, RelationEntry,
};
pub use domain::ports::{IssueSource, Page};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    CommentFetcher, ExportSummary, IssueExporter, IssueFetcher, RelationExtractor,
    RelationTableOutcome,
};
