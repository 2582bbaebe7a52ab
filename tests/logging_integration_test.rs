// Integration test for the file logger. Installs the global subscriber,
// so it lives in its own test binary.

use setup_dev_key::infrastructure::logging::{
    LogConfig, LogFormat, LoggerImpl, RotationPolicy, SecretScrubber, LOG_FILE_NAME,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_writes_json_lines() {
    temp_env::with_var_unset("RUST_LOG", file_logging_writes_json_lines);
}

fn file_logging_writes_json_lines() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Compact,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    assert!(logger.has_file_output());

    let scrubber = SecretScrubber::new();
    tracing::info!(
        detail = %scrubber.scrub_message("store returned AIzaSyTestKey1234567890ABCDEF"),
        "test message"
    );
    tracing::debug!("filtered out at info level");

    // Flush the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 1, "Only the info event should be written");

    let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "test message");
    assert!(!contents.contains("AIzaSyTestKey1234567890ABCDEF"));
    assert!(contents.contains("[API_KEY_REDACTED]"));

    // A second subscriber cannot be installed
    assert!(LoggerImpl::init(&config).is_err());
}
