//! Config loading from disk.

use revline::grade::{Comparison, GradingConfig};
use revline::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("autograding.json");
    fs::write(
        &path,
        r#"{"tests":[{"name":"t","run":"cat","input":"a","output":"a","comparison":"exact","timeout":1,"points":3}]}"#,
    )
    .unwrap();

    let config = GradingConfig::load(&path).unwrap();
    assert_eq!(config.tests.len(), 1);
    assert_eq!(config.tests[0].comparison, Comparison::Exact);
    assert_eq!(config.total_points(), 3);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = GradingConfig::load(temp_dir.path().join("nope.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_invalid_json_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("autograding.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(GradingConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/.github/classroom/autograding.json");
    let config = GradingConfig::load(path).unwrap();
    assert!(!config.tests.is_empty());
    assert!(config.total_points() > 0);
}
