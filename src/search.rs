//! Server-side search flow mirroring the browser page: a two-phase task
//! graph where the weather call gates a concurrent news + currency fan-out.

use serde::Serialize;
use tracing::warn;

use crate::currencies;
use crate::error::ApiError;
use crate::models::{CurrencyQuote, NewsBundle, WeatherReport};
use crate::state::AppState;

/// Outcome class of a finished search. `Partial` means weather succeeded
/// but at least one secondary panel degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Ok,
    Partial,
}

/// Aggregate result of one search. Secondary panels are `None` when their
/// fetch failed; weather is always present because a weather failure aborts
/// the search before this value exists.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub weather: WeatherReport,
    /// Currency base derived from the weather country.
    pub base: String,
    /// Fixed target currency.
    pub target: String,
    pub news: Option<NewsBundle>,
    pub currency: Option<CurrencyQuote>,
    pub status: SearchStatus,
}

impl SearchResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Ok
    }
}

/// Runs one search end to end.
///
/// Phase 1 is the weather call; its failure propagates unchanged and the
/// secondary requests are never issued. Phase 2 issues news and currency
/// concurrently; each may fail independently, degrading its panel to `None`
/// without touching the sibling or the already-fetched weather.
pub async fn run_search(state: &AppState, city: &str) -> Result<SearchResult, ApiError> {
    let weather = state.weather.fetch(city).await?;

    let base = currencies::currency_for_country(&weather.country).to_string();
    let target = currencies::DEFAULT_CURRENCY.to_string();

    let (news, currency) = tokio::join!(
        state.news.fetch(city),
        state.currency.fetch(&base, &target),
    );

    let news = news
        .map_err(|e| warn!(city, "news panel degraded: {e}"))
        .ok();
    let currency = currency
        .map_err(|e| warn!(%base, %target, "currency panel degraded: {e}"))
        .ok();

    let status = if news.is_some() && currency.is_some() {
        SearchStatus::Ok
    } else {
        SearchStatus::Partial
    };

    Ok(SearchResult {
        weather,
        base,
        target,
        news,
        currency,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_value(SearchStatus::Ok).unwrap(), "ok");
        assert_eq!(
            serde_json::to_value(SearchStatus::Partial).unwrap(),
            "partial"
        );
    }
}
