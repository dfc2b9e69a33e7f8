//! Configuration loading for issue-graph.
//!
//! Defaults are layered under the project YAML files and `ISSUE_GRAPH_*`
//! environment variables with figment, then checked by
//! [`ConfigLoader::validate`].

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
