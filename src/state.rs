//! Shared handler state: the three provider clients.

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::providers::{CurrencyClient, NewsClient, WeatherClient, currency, news, weather};

/// Cloneable bundle of provider clients injected into every handler. The
/// clients share one `reqwest::Client`, so the configured timeout applies
/// uniformly to all outbound calls.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherClient,
    pub news: NewsClient,
    pub currency: CurrencyClient,
}

impl AppState {
    /// Builds the production state against the real provider endpoints.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("citydash/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build outbound HTTP client")?;

        Ok(Self {
            weather: WeatherClient::new(
                http.clone(),
                weather::DEFAULT_BASE_URL,
                config.openweather_api_key.clone(),
            ),
            news: NewsClient::new(
                http.clone(),
                news::DEFAULT_BASE_URL,
                config.news_api_key.clone(),
            ),
            currency: CurrencyClient::new(
                http,
                currency::DEFAULT_BASE_URL,
                config.currency_api_key.clone(),
            ),
        })
    }
}
