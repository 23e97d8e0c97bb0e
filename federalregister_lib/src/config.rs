//! Environment-driven settings for the API client and the pacing layer.

use std::time::Duration;

use federalregister_api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use thiserror::Error;

/// An environment variable held a value that could not be used.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    NotANumber { key: String, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: String },
}

/// Retry policy for transient failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(30000),
        }
    }
}

impl RetryConfig {
    /// No retries at all.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// All runtime settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub client: ClientConfig,
    /// Minimum gap between two consecutive requests.
    pub min_interval: Duration,
    pub retry: RetryConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            min_interval: Duration::from_millis(1000),
            retry: RetryConfig::default(),
        }
    }
}

impl Settings {
    /// Reads `FEDERALREGISTER_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let base_url = lookup("FEDERALREGISTER_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = read_u64(&lookup, "FEDERALREGISTER_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT.as_secs());
        if timeout_secs == 0 {
            return Err(SettingsError::Zero {
                key: "FEDERALREGISTER_TIMEOUT_SECS".to_string(),
            });
        }
        let min_interval = read_u64(&lookup, "FEDERALREGISTER_MIN_INTERVAL_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.min_interval);
        let max_retries = read_u64(&lookup, "FEDERALREGISTER_RETRY_MAX")?
            .map(|v| v as usize)
            .unwrap_or(defaults.retry.max_retries);
        let base_delay = read_u64(&lookup, "FEDERALREGISTER_RETRY_BASE_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry.base_delay);
        let max_delay = read_u64(&lookup, "FEDERALREGISTER_RETRY_MAX_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry.max_delay);

        Ok(Self {
            client: ClientConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            min_interval,
            retry: RetryConfig {
                max_retries,
                base_delay,
                max_delay,
            },
        })
    }
}

fn read_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| SettingsError::NotANumber {
                key: key.to_string(),
                value: raw,
            }),
    }
}
