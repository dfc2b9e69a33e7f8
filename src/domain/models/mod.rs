//! Domain models for the issue export pipeline.

pub mod config;
pub mod issue;
pub mod rows;

pub use config::{Config, FetchConfig, GitHubConfig, LoggingConfig, OutputConfig};
pub use issue::{AuthorType, Comment, Issue};
pub use rows::{CommentRef, LogRow, RelationEntry, RelationRow};
