//! Unit tests for logging helpers

use tagwire_domain::Error;
use tagwire_infrastructure::LoggingConfig;
use tagwire_infrastructure::logging::{build_filter, init_logging, parse_log_level};
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;

fn config(level: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_string(),
        ..LoggingConfig::default()
    }
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_filter_uses_normalized_level() {
    let filter = build_filter(&config("warning")).unwrap();
    assert_eq!(
        Layer::<Registry>::max_level_hint(&filter),
        Some(LevelFilter::WARN)
    );

    let filter = build_filter(&config("DEBUG")).unwrap();
    assert_eq!(
        Layer::<Registry>::max_level_hint(&filter),
        Some(LevelFilter::DEBUG)
    );
}

#[test]
fn test_filter_rejects_invalid_level() {
    let err = build_filter(&config("verbose")).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_init_logging_installs_once() {
    init_logging(&config("info")).unwrap();

    let err = init_logging(&config("info")).unwrap_err();
    match err {
        Error::Configuration { message, source } => {
            assert!(message.contains("Failed to install log subscriber"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
