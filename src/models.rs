//! Normalized entities returned by the API endpoints.
//!
//! Everything here is a request-scoped value object: constructed fresh by a
//! provider client, serialized once into the response, never shared or
//! mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

/// Current weather for a city, remapped from the provider response.
///
/// Numeric fields pass through upstream units unmodified; metric units are
/// requested from the provider, so temperatures are °C, wind speed m/s,
/// pressure hPa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name as the provider spells it.
    pub city: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    pub coords: Coords,
    pub temperature: f64,
    pub feels_like: f64,
    /// Textual condition; empty when the provider sent no condition array.
    pub description: String,
    /// Provider icon identifier; empty when absent.
    pub icon: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Surface pressure in hPa.
    pub pressure: u32,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Rainfall over the last 3 hours in mm; 0 when the provider omits it.
    pub rain_3h: f64,
}

/// One news article. Source and description are optional upstream and are
/// omitted from the JSON rather than serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

/// News search result for a city. An empty article list is a valid success
/// and distinct from a failed fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsBundle {
    pub city: String,
    pub total: usize,
    pub articles: Vec<Article>,
}

impl NewsBundle {
    /// Builds a bundle, keeping `total` equal to the article count.
    #[must_use]
    pub fn new(city: String, articles: Vec<Article>) -> Self {
        Self {
            city,
            total: articles.len(),
            articles,
        }
    }
}

/// Exchange rate between two currencies, derived from the provider's
/// USD-anchored rate table. Never constructed with a non-finite or
/// non-positive rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub base: String,
    pub target: String,
    /// Units of `target` per one unit of `base`.
    pub rate: f64,
    /// Provider's as-of date string, passed through verbatim.
    pub date: Option<String>,
}
