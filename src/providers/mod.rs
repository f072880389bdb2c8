//! HTTP clients for the three upstream providers.
//!
//! Each client wraps a single outbound call: it turns a normalized query
//! into the provider-specific request, remaps the provider response into a
//! normalized entity, and classifies every failure into the shared
//! [`ApiError`](crate::error::ApiError) taxonomy. No client retries.

pub mod currency;
pub mod news;
pub mod weather;

pub use currency::CurrencyClient;
pub use news::NewsClient;
pub use weather::WeatherClient;
