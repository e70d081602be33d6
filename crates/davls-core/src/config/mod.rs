use std::fmt;
use std::str::FromStr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Prefix for environment overrides, e.g. `DAVLS_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "DAVLS";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    pub query_path: String,
    pub format: OutputFormat,
}

/// How a listing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One aligned line per entry.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("listing.query_path", "/")?
            .set_default("listing.format", OutputFormat::default().as_str())?)
    }

    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml` and
    /// environment variables. Environment variables take precedence over the
    /// file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::build(
            Self::defaults()?
                // TOML file
                .add_source(config::File::with_name("config.toml").required(false))
                // Env
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .ignore_empty(true)
                        .try_parsing(true),
                ),
        )
    }

    /// ## Summary
    /// Builds and deserializes a prepared configuration builder.
    ///
    /// ## Errors
    /// Returns an error if a source fails to load or the result does not
    /// deserialize into `Settings`.
    pub fn build(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;
        tracing::debug!(
            level = %settings.logging.level,
            query_path = %settings.listing.query_path,
            format = %settings.listing.format,
            "Settings resolved"
        );
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
