//! Configuration management for the front desk consoles
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FRONTDESK__ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Clinic billing rules
    pub clinic: ClinicConfig,

    /// How records are shown on screen
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, used when RUST_LOG is not set
    pub filter: String,

    /// Emit JSON log lines instead of plain text
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClinicConfig {
    /// Discount applied to insured bills, 0-100
    pub insurance_discount_percent: Decimal,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
}

/// Rendering of the "view" screens
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FRONTDESK_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("logging.filter", "warn")?
            .set_default("logging.json", false)?
            .set_default("clinic.insurance_discount_percent", "10")?
            .set_default("display.format", "text")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FRONTDESK__ prefix)
            .add_source(
                Environment::with_prefix("FRONTDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.clinic.insurance_discount_percent;
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            return Err(ConfigError::Message(format!(
                "clinic.insurance_discount_percent must be between 0 and 100, got {}",
                rate
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging: LoggingConfig::default(),
            clinic: ClinicConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            insurance_discount_percent: shared::STANDARD_INSURANCE_DISCOUNT_PERCENT,
        }
    }
}
