//! ExchangeRate-API client.
//!
//! The provider is queried once for its full rate table anchored to a fixed
//! reference currency; the cross rate is derived locally by division.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::models::CurrencyQuote;

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Anchor of the provider's rate table.
const REFERENCE_CURRENCY: &str = "USD";

const FALLBACK_MESSAGE: &str = "Failed to fetch currency data";

#[derive(Debug, Clone)]
pub struct CurrencyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CurrencyClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetches the rate table and derives the `target`-per-`base` rate.
    pub async fn fetch(&self, base: &str, target: &str) -> Result<CurrencyQuote, ApiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::ConfigMissing("CURRENCY_API_KEY"))?;

        let url = format!("{}/v6/{}/latest/{}", self.base_url, key, REFERENCE_CURRENCY);
        debug!(base, target, "requesting exchange rate table");

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("currency request failed: {e}");
            ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "currency provider returned an error");
            return Err(ApiError::UpstreamUnavailable(FALLBACK_MESSAGE));
        }

        let raw: RateTableResponse = response.json().await.map_err(|e| {
            error!("undecodable currency response: {e}");
            ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
        })?;

        // The provider's own success flag is authoritative, even on HTTP 200.
        if raw.result.as_deref() != Some("success") {
            error!(result = ?raw.result, error_type = ?raw.error_type, "currency provider reported failure");
            return Err(ApiError::UpstreamBadGateway(raw.error_type));
        }

        let rate = rate_from_table(&raw.conversion_rates, base, target)?;

        Ok(CurrencyQuote {
            base: base.to_string(),
            target: target.to_string(),
            rate,
            date: raw.time_last_update_utc,
        })
    }
}

/// Derives the cross rate `target`-per-`base` from a table of rates against
/// the reference currency. Missing codes and degenerate values (zero or
/// non-finite denominators, non-positive quotients) all yield `RateNotFound`
/// so no NaN or Infinity can escape.
fn rate_from_table(
    rates: &HashMap<String, f64>,
    base: &str,
    target: &str,
) -> Result<f64, ApiError> {
    let base_rate = *rates.get(base).ok_or(ApiError::RateNotFound)?;
    let target_rate = *rates.get(target).ok_or(ApiError::RateNotFound)?;

    if !base_rate.is_finite() || base_rate <= 0.0 {
        return Err(ApiError::RateNotFound);
    }

    let rate = target_rate / base_rate;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ApiError::RateNotFound);
    }

    Ok(rate)
}

#[derive(Debug, Deserialize)]
struct RateTableResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    time_last_update_utc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> HashMap<String, f64> {
        HashMap::from([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.92),
            ("JPY".to_string(), 149.5),
            ("KZT".to_string(), 478.2),
        ])
    }

    #[rstest]
    #[case("EUR", "USD")]
    #[case("USD", "JPY")]
    #[case("KZT", "EUR")]
    #[case("USD", "USD")]
    fn rate_matches_table_division_and_round_trips(#[case] base: &str, #[case] target: &str) {
        let rates = table();
        let forward = rate_from_table(&rates, base, target).unwrap();
        let backward = rate_from_table(&rates, target, base).unwrap();

        assert_eq!(forward, rates[target] / rates[base]);
        assert!((forward * backward - 1.0).abs() < 1e-6);
    }

    #[rstest]
    #[case("XXX", "USD")]
    #[case("USD", "XXX")]
    fn unknown_code_is_rate_not_found(#[case] base: &str, #[case] target: &str) {
        let result = rate_from_table(&table(), base, target);
        assert!(matches!(result, Err(ApiError::RateNotFound)));
    }

    #[test]
    fn zero_denominator_is_rate_not_found() {
        let mut rates = table();
        rates.insert("ZWL".to_string(), 0.0);
        assert!(matches!(
            rate_from_table(&rates, "ZWL", "USD"),
            Err(ApiError::RateNotFound)
        ));
    }

    #[test]
    fn non_finite_values_never_escape() {
        let mut rates = table();
        rates.insert("BAD".to_string(), f64::NAN);
        assert!(matches!(
            rate_from_table(&rates, "BAD", "USD"),
            Err(ApiError::RateNotFound)
        ));
        assert!(matches!(
            rate_from_table(&rates, "USD", "BAD"),
            Err(ApiError::RateNotFound)
        ));
    }

    #[test]
    fn provider_failure_flag_deserializes() {
        let raw: RateTableResponse = serde_json::from_str(
            r#"{ "result": "error", "error-type": "invalid-key" }"#,
        )
        .unwrap();
        assert_eq!(raw.result.as_deref(), Some("error"));
        assert_eq!(raw.error_type.as_deref(), Some("invalid-key"));
        assert!(raw.conversion_rates.is_empty());
    }
}
