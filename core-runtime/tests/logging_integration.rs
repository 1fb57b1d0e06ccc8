//! Integration tests for logging system

use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig, FILTER_ENV};
use core_runtime::Error;

#[test]
fn test_logging_initialization_only_once() {
    // The global subscriber can only be installed once per process, so both
    // calls live in this one test.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug);

    init_logging(config.clone()).unwrap();
    tracing::debug!("Subscriber installed");

    let err = init_logging(config).unwrap_err();
    match err {
        Error::Config(message) => assert!(message.contains("Failed to initialize logging")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_filter_from_env() {
    // Every RUST_LOG mutation in this binary happens inside this test.
    std::env::set_var(FILTER_ENV, "core_display=trace");
    let config = LoggingConfig::default()
        .with_filter("bridge_console=debug")
        .with_filter_from_env();
    assert_eq!(config.filter, Some("core_display=trace".to_string()));

    std::env::set_var(FILTER_ENV, "   ");
    let config = LoggingConfig::default().with_filter_from_env();
    assert_eq!(config.filter, None);

    std::env::remove_var(FILTER_ENV);
    let config = LoggingConfig::default()
        .with_filter("bridge_console=debug")
        .with_filter_from_env();
    assert_eq!(config.filter, Some("bridge_console=debug".to_string()));

    let config = LoggingConfig::default().with_filter_from_env();
    assert_eq!(config.filter, None);
    assert_eq!(config.level, LogLevel::Info);
}
