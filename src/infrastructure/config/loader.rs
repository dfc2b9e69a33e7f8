use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project configuration file, created by hand next to the outputs.
pub const PROJECT_CONFIG: &str = ".issue-graph/config.yaml";

/// Optional local overrides, not meant to be committed.
pub const LOCAL_CONFIG: &str = ".issue-graph/local.yaml";

/// Prefix of environment variable overrides (`ISSUE_GRAPH_FETCH__MAX_ISSUES`).
pub const ENV_PREFIX: &str = "ISSUE_GRAPH_";

/// Configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Repository owner and name cannot be empty")]
    EmptyRepository,

    #[error("Invalid max_issues: {0}. Must be at least 1")]
    InvalidMaxIssues(usize),

    #[error("Invalid page_size: {0}. Must be between 1 and 100")]
    InvalidPageSize(u32),

    #[error("Invalid API base URL: {0}. Must start with http:// or https://")]
    InvalidApiBaseUrl(String),

    #[error("Output path cannot be empty: {0}")]
    EmptyOutputPath(&'static str),

    #[error("Issue log and relation table must be different files: {0}")]
    SameOutputPaths(PathBuf),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `.issue-graph/config.yaml`, or `explicit` when given
    /// 3. `.issue-graph/local.yaml` (skipped when `explicit` is given)
    /// 4. Environment variables (`ISSUE_GRAPH_*`, `__` separates sections)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        figment = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                figment.merge(Yaml::file(path))
            }
            None => figment
                .merge(Yaml::file(PROJECT_CONFIG))
                .merge(Yaml::file(LOCAL_CONFIG)),
        };

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let github = &config.github;
        if github.owner.trim().is_empty() || github.repo.trim().is_empty() {
            return Err(ConfigError::EmptyRepository);
        }

        if !(github.api_base_url.starts_with("http://")
            || github.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidApiBaseUrl(github.api_base_url.clone()));
        }

        if config.fetch.max_issues == 0 {
            return Err(ConfigError::InvalidMaxIssues(config.fetch.max_issues));
        }

        if config.fetch.page_size == 0 || config.fetch.page_size > 100 {
            return Err(ConfigError::InvalidPageSize(config.fetch.page_size));
        }

        let output = &config.output;
        if output.issue_log_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath("issue_log_path"));
        }
        if output.relations_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath("relations_path"));
        }
        if output.issue_log_path == output.relations_path {
            return Err(ConfigError::SameOutputPaths(output.issue_log_path.clone()));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
