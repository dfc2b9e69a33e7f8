//! Adapters implementing the domain ports.
//!
//! - `github`: GitHub REST API v3 issue source
//! - `memory`: in-memory issue source for tests and dry runs

pub mod github;
pub mod memory;

pub use github::GitHubClient;
pub use memory::InMemoryIssueSource;
