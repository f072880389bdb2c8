//! API endpoints: parameter validation, client invocation, JSON responses.
//!
//! Handlers hold no logic beyond extracting and validating query
//! parameters; error translation lives on [`ApiError`] and response shapes
//! on the models themselves.

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{CurrencyQuote, NewsBundle, WeatherReport};
use crate::search::{self, SearchResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/news", get(get_news))
        .route("/currency", get(get_currency))
        .route("/search", get(get_search))
}

#[derive(Debug, Deserialize)]
struct CityParams {
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrencyParams {
    base: Option<String>,
    target: Option<String>,
}

/// Rejects absent and whitespace-only city values before any outbound call.
fn require_city(params: &CityParams) -> Result<&str, ApiError> {
    match params.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => Ok(city),
        _ => Err(ApiError::MissingParameter(
            "Missing required query parameter: city",
        )),
    }
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = require_city(&params)?;
    Ok(Json(state.weather.fetch(city).await?))
}

async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<Json<NewsBundle>, ApiError> {
    let city = require_city(&params)?;
    Ok(Json(state.news.fetch(city).await?))
}

async fn get_currency(
    State(state): State<AppState>,
    Query(params): Query<CurrencyParams>,
) -> Result<Json<CurrencyQuote>, ApiError> {
    let (base, target) = match (
        params.base.as_deref().map(str::trim),
        params.target.as_deref().map(str::trim),
    ) {
        (Some(base), Some(target)) if !base.is_empty() && !target.is_empty() => (base, target),
        _ => {
            return Err(ApiError::MissingParameter(
                "Missing required query parameters: base and target",
            ));
        }
    };

    Ok(Json(state.currency.fetch(base, target).await?))
}

async fn get_search(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<Json<SearchResult>, ApiError> {
    let city = require_city(&params)?;
    Ok(Json(search::run_search(&state, city).await?))
}
