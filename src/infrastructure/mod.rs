//! Infrastructure layer module
//!
//! - Configuration management (figment: defaults, YAML, environment)
//! - Logging infrastructure (tracing-subscriber, secret scrubbing)
//! - Credentials management (GitHub token from the environment)

pub mod config;
pub mod credentials;
pub mod logging;
