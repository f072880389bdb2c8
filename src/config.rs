//! Environment-backed configuration.
//!
//! Provider credentials are optional at startup: a missing key only turns
//! into an error when the corresponding endpoint is invoked, so the server
//! can run with a partial set of providers configured.

use std::env;
use std::time::Duration;

/// Listening port; fixed, not configurable.
pub const PORT: u16 = 3000;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the weather provider (`OPENWEATHER_API_KEY`).
    pub openweather_api_key: Option<String>,
    /// Credential for the news provider (`NEWS_API_KEY`).
    pub news_api_key: Option<String>,
    /// Credential for the exchange rate provider (`CURRENCY_API_KEY`).
    pub currency_api_key: Option<String>,
    /// Timeout applied to every outbound request
    /// (`CITYDASH_TIMEOUT_SECS`, default 10).
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let timeout_secs = env::var("CITYDASH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            openweather_api_key: non_empty_var("OPENWEATHER_API_KEY"),
            news_api_key: non_empty_var("NEWS_API_KEY"),
            currency_api_key: non_empty_var("CURRENCY_API_KEY"),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Treats unset and blank variables the same way.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_counts_as_missing() {
        // SAFETY: test-only env mutation, variable unique to this test
        unsafe {
            env::set_var("CITYDASH_TEST_BLANK_KEY", "   ");
        }
        assert!(non_empty_var("CITYDASH_TEST_BLANK_KEY").is_none());
        unsafe {
            env::remove_var("CITYDASH_TEST_BLANK_KEY");
        }
        assert!(non_empty_var("CITYDASH_TEST_BLANK_KEY").is_none());
    }

    #[test]
    fn timeout_defaults_when_unset() {
        let config = AppConfig::from_env();
        assert!(config.request_timeout >= Duration::from_secs(1));
    }
}
