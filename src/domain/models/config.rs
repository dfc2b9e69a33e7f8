use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for issue-graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Source repository and API endpoint
    #[serde(default)]
    pub github: GitHubConfig,

    /// Fetch ceilings and paging
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub repository and endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Repository owner (user or organisation)
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the web UI, used to recognise full issue links
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_owner() -> String {
    "metabase".to_string()
}

fn default_repo() -> String {
    "metabase".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_web_base_url() -> String {
    "https://github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("issue-graph/", env!("CARGO_PKG_VERSION")).to_string()
}

impl GitHubConfig {
    /// `owner/repo` slug
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            api_base_url: default_api_base_url(),
            web_base_url: default_web_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Fetch ceilings and paging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FetchConfig {
    /// Maximum number of issues (pull requests excluded) to export
    #[serde(default = "default_max_issues")]
    pub max_issues: usize,

    /// Items requested per page (GitHub caps this at 100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Follow comment pages; when false only the first page is requested
    #[serde(default = "default_true")]
    pub paginate_comments: bool,
}

const fn default_max_issues() -> usize {
    5000
}

const fn default_page_size() -> u32 {
    100
}

const fn default_true() -> bool {
    true
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_issues: default_max_issues(),
            page_size: default_page_size(),
            paginate_comments: default_true(),
        }
    }
}

/// Output file locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Issue/comment log, rewritten on every run
    #[serde(default = "default_issue_log_path")]
    pub issue_log_path: PathBuf,

    /// Relation table, only created when absent
    #[serde(default = "default_relations_path")]
    pub relations_path: PathBuf,
}

fn default_issue_log_path() -> PathBuf {
    PathBuf::from("metabase_issues_filtered.csv")
}

fn default_relations_path() -> PathBuf {
    PathBuf::from("issues_relations.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            issue_log_path: default_issue_log_path(),
            relations_path: default_relations_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation for file output: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_metabase_export() {
        let config = Config::default();
        assert_eq!(config.github.slug(), "metabase/metabase");
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert_eq!(config.fetch.max_issues, 5000);
        assert_eq!(config.fetch.page_size, 100);
        assert!(config.fetch.paginate_comments);
        assert_eq!(
            config.output.issue_log_path,
            PathBuf::from("metabase_issues_filtered.csv")
        );
        assert_eq!(
            config.output.relations_path,
            PathBuf::from("issues_relations.csv")
        );
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r"
github:
  owner: rust-lang
  repo: cargo
fetch:
  max_issues: 10
";
        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.github.slug(), "rust-lang/cargo");
        assert_eq!(config.github.web_base_url, "https://github.com");
        assert_eq!(config.fetch.max_issues, 10);
        assert_eq!(config.fetch.page_size, 100);
        assert_eq!(config.logging.level, "info");
    }
}
