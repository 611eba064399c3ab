//! Integration tests for logger behavior.

use swim_compare::logger::{set_level, set_level_from_str, Level};
use swim_compare::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_timestamped_lines() {
    use swim_compare::logger::init_file_logging;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logs").join("swimcompare.log");

    assert!(init_file_logging(&path));
    error!("written to file");

    let content = std::fs::read_to_string(&path).expect("log file should exist");
    let line = content
        .lines()
        .find(|l| l.contains("written to file"))
        .expect("message should be logged");
    assert!(line.contains("[ERROR]"));
    assert!(line.as_bytes()[0].is_ascii_digit(), "line should start with a timestamp");
}
