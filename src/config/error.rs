//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("{field} must be at most {max} ms, got {value}")]
    DurationTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Advance delay must be positive in auto mode")]
    InvalidAdvanceDelay,

    #[error("Unknown log format '{0}' (expected pretty or json)")]
    InvalidLogFormat(String),

    #[error("Log filter directive must not be empty")]
    EmptyLogLevel,
}
