//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PRODUCT_WIZARD`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use product_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Advance mode: {:?}", config.wizard.advance_mode);
//! ```

mod catalog;
mod error;
mod logging;
mod wizard;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use wizard::{TimingConfig, WizardConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog document location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Advance mode and timings
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with the `PRODUCT_WIZARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PRODUCT_WIZARD__CATALOG__PATH=catalog.json` -> `catalog.path`
    /// - `PRODUCT_WIZARD__WIZARD__TIMING__ADVANCE_DELAY_MS=400`
    ///   -> `wizard.timing.advance_delay_ms`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRODUCT_WIZARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The catalog path is checked when the binary resolves it, since it
    /// may also come from the command line.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.wizard.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
