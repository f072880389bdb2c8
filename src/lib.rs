//! `citydash` - backend aggregating weather, news and currency exchange
//! data for a city behind one JSON API, plus the static browser page that
//! renders it.

pub mod api;
pub mod config;
pub mod currencies;
pub mod error;
pub mod models;
pub mod providers;
pub mod search;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use error::ApiError;
pub use models::{Article, Coords, CurrencyQuote, NewsBundle, WeatherReport};
pub use search::{SearchResult, SearchStatus};
pub use state::AppState;
