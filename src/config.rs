use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the backend the forms submit to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// - `BOOKING_API_BASE_URL`: backend origin, defaults to `http://localhost:3000`
    /// - `BOOKING_API_TIMEOUT_SECS`: per-request timeout, defaults to 10
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("BOOKING_API_BASE_URL") {
            Some(value) => {
                reqwest::Url::parse(&value).map_err(|_| ConfigError::InvalidValue {
                    key: "BOOKING_API_BASE_URL",
                    value: value.clone(),
                })?;
                value
            }
            None => {
                info!("BOOKING_API_BASE_URL not set, using default: {}", DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let timeout = match lookup("BOOKING_API_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "BOOKING_API_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }
}
