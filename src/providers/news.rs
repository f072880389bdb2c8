//! GNews search client.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::models::{Article, NewsBundle};

pub const DEFAULT_BASE_URL: &str = "https://gnews.io";

/// Hard cap on returned articles. This is a policy choice passed to the
/// provider as an explicit `max` parameter, and enforced again locally so
/// the cap holds even if the provider ignores it.
pub const ARTICLE_LIMIT: usize = 5;

const FALLBACK_MESSAGE: &str = "Failed to fetch news data";

/// Client for the news search endpoint. This provider exposes no distinct
/// not-found or bad-request semantics for our queries, so every failure
/// collapses to `UpstreamUnavailable`.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsClient {
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

    /// Fetches up to [`ARTICLE_LIMIT`] English-language articles mentioning
    /// the city. Zero articles is a valid result.
    pub async fn fetch(&self, city: &str) -> Result<NewsBundle, ApiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::ConfigMissing("NEWS_API_KEY"))?;

        let url = format!("{}/api/v4/search", self.base_url);
        let max = ARTICLE_LIMIT.to_string();
        debug!(city, "requesting news");

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("lang", "en"), ("max", max.as_str()), ("token", key)])
            .send()
            .await
            .map_err(|e| {
                error!("news request failed: {e}");
                ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "news provider returned an error");
            return Err(ApiError::UpstreamUnavailable(FALLBACK_MESSAGE));
        }

        let raw: GnewsResponse = response.json().await.map_err(|e| {
            error!("undecodable news response: {e}");
            ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
        })?;

        Ok(bundle_from(city, raw.articles))
    }
}

fn bundle_from(city: &str, articles: Vec<GnewsArticle>) -> NewsBundle {
    let articles = articles
        .into_iter()
        .take(ARTICLE_LIMIT)
        .map(|a| Article {
            title: a.title,
            description: a.description,
            url: a.url,
            source: a.source.and_then(|s| s.name),
            published_at: a.published_at,
        })
        .collect();

    NewsBundle::new(city.to_string(), articles)
}

#[derive(Debug, Deserialize)]
struct GnewsResponse {
    #[serde(default)]
    articles: Vec<GnewsArticle>,
}

#[derive(Debug, Deserialize)]
struct GnewsArticle {
    title: String,
    description: Option<String>,
    url: String,
    source: Option<GnewsSource>,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GnewsSource {
    name: Option<String>,
}
