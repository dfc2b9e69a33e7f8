//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueSource: paged access to a repository's issues and comments
//!
//! The fetch services depend only on this trait, so they run the same
//! against the GitHub adapter and the in-memory source used in tests.

pub mod issue_source;

pub use issue_source::{IssueSource, Page};
