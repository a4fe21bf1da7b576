//! Config file handling: missing and malformed files degrade to defaults,
//! unexpected read failures stop resolution.

use super::test_utils::TestWorkspace;
use axe_crawler::config::{default_viewports, Verbosity};
use axe_crawler::ConfigError;

#[test]
fn test_missing_default_file_is_not_an_error() {
    let ws = TestWorkspace::new();

    let config = ws
        .resolver()
        .resolve(["axe-crawler", "--depth", "2", "example.com"])
        .unwrap();

    assert_eq!(config.depth, 2);
    assert_eq!(config.output, "reports");
    assert_eq!(config.view_ports, default_viewports());
    assert_eq!(config.verbose, Verbosity::Error);
    assert_eq!(ws.error_messages(), vec!["No config file found".to_string()]);
}

#[test]
fn test_missing_explicit_file_is_not_an_error() {
    let ws = TestWorkspace::new();
    let path = ws.dir.path().join("custom.json");

    let config = ws
        .resolver()
        .resolve([
            "axe-crawler".to_string(),
            "--configFile".to_string(),
            path.to_string_lossy().to_string(),
        ])
        .unwrap();

    assert_eq!(config.depth, 5);
    assert_eq!(ws.error_messages(), vec!["No config file found".to_string()]);
}

#[test]
fn test_explicit_file_overrides_default_path() {
    let ws = TestWorkspace::new();
    ws.write_default_config(r#"{"depth": 1}"#);
    let custom = ws.dir.path().join("custom.json");
    std::fs::write(&custom, r#"{"depth": 9}"#).unwrap();

    let config = ws
        .resolver()
        .resolve([
            "axe-crawler".to_string(),
            format!("--configFile={}", custom.display()),
        ])
        .unwrap();

    assert_eq!(config.depth, 9);
    assert!(ws.error_messages().is_empty());
}

#[test]
fn test_invalid_json_is_ignored_with_two_errors() {
    let ws = TestWorkspace::new();
    ws.write_default_config(r#"{"depth": 10,"#);

    let config = ws
        .resolver()
        .resolve(["axe-crawler", "--output", "out", "example.com"])
        .unwrap();

    assert_eq!(config.depth, 5);
    assert_eq!(config.output, "out");
    assert_eq!(config.domain.as_deref(), Some("example.com"));

    let errors = ws.error_messages();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Invalid JSON config file"));
    assert!(errors[0].contains(".axe-crawler.json"));
    assert_eq!(errors[1], "Ignoring JSON config file...");
}

#[test]
fn test_wrong_shape_is_ignored_like_invalid_json() {
    let ws = TestWorkspace::new();
    ws.write_default_config(r#"{"depth": 10, "verbose": "shouting"}"#);

    let config = ws.resolver().resolve(["axe-crawler"]).unwrap();

    assert_eq!(config.depth, 5);
    assert_eq!(ws.error_messages().len(), 2);
}

#[test]
fn test_unreadable_path_is_fatal() {
    let ws = TestWorkspace::new();
    let dir_path = ws.dir.path().to_string_lossy().to_string();

    let err = ws
        .resolver()
        .resolve(["axe-crawler".to_string(), "--configFile".to_string(), dir_path])
        .unwrap_err();

    assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
}

#[test]
fn test_check_from_file() {
    let ws = TestWorkspace::new();
    ws.write_default_config(r#"{"check": 25}"#);

    let config = ws.resolver().resolve(["axe-crawler"]).unwrap();
    assert_eq!(config.check, Some(25));

    let config = ws.resolver().resolve(["axe-crawler", "--dryRun"]).unwrap();
    assert_eq!(config.check, Some(0));
}
