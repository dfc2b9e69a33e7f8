// Installs the global subscriber, so it lives in its own test binary.

use std::fs;
use std::time::Duration;

use issue_graph::infrastructure::logging::LoggerImpl;
use issue_graph::LoggingConfig;
use tempfile::TempDir;
use tracing::info;

#[test]
fn test_logger_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "info".to_string(),
        format: "json".to_string(),
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: "never".to_string(),
    };

    let logger = LoggerImpl::init(&config).unwrap();
    info!(issue_number = 42, "fetched issue page");

    // A second subscriber cannot be installed.
    assert!(LoggerImpl::init(&config).is_err());

    // Dropping the guard flushes the non-blocking writer.
    drop(logger);
    std::thread::sleep(Duration::from_millis(100));

    let content = fs::read_to_string(temp_dir.path().join("issue-graph.log")).unwrap();
    let line = content
        .lines()
        .find(|l| l.contains("fetched issue page"))
        .expect("log line not found");
    let record: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["fields"]["issue_number"], 42);
}
