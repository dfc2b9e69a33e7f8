//! GitHub Issues adapter.
//!
//! Read-only access to a single repository's issues and issue comments
//! through the REST API v3.

pub mod client;
pub mod models;

pub use client::GitHubClient;
