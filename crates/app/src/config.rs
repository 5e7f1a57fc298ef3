//! Process configuration read from environment variables.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use warehouse_observability::{LogFormat, ParseLogFormatError, TracingConfig};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_VAR: &str = "WAREHOUSE_LOG_FORMAT";
pub const SEED_DATE_VAR: &str = "WAREHOUSE_SEED_DATE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WAREHOUSE_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("WAREHOUSE_SEED_DATE: invalid date `{0}`; expected YYYY-MM-DD")]
    SeedDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub tracing: TracingConfig,
    /// Fixed "today" for sample expiry dates; `None` means the current UTC date.
    pub seed_date: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut tracing = TracingConfig::default();
        if let Some(filter) = get(LOG_FILTER_VAR) {
            tracing.filter = filter;
        }
        if let Some(format) = get(LOG_FORMAT_VAR) {
            tracing.format = format.parse::<LogFormat>()?;
        }

        let seed_date = get(SEED_DATE_VAR)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| ConfigError::SeedDate(raw))
            })
            .transpose()?;

        Ok(Self { tracing, seed_date })
    }

    pub fn seed_date_or_today(&self) -> NaiveDate {
        self.seed_date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
