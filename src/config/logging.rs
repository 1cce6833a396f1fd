//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive
    #[serde(default = "default_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn log_format(&self) -> Result<LogFormat, ValidationError> {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ValidationError::InvalidLogFormat(other.to_string())),
        }
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        self.log_format()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info,product_wizard=debug".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,product_wizard=debug");
        assert_eq!(config.log_format(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_json_format_case_insensitive() {
        let config = LoggingConfig {
            format: "JSON".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.log_format(), Ok(LogFormat::Json));
    }

    #[test]
    fn test_invalid_logging_rejected() {
        let config = LoggingConfig {
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogFormat("xml".to_string()))
        );

        let config = LoggingConfig {
            level: "  ".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogLevel));
    }
}
