//! OpenWeatherMap client.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::models::{Coords, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const FALLBACK_MESSAGE: &str = "Failed to fetch weather data";

/// Client for the current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
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

    /// Fetches current weather for a city. The caller guarantees `city` is
    /// non-empty; validation happens at the API layer before any outbound
    /// call.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::ConfigMissing("OPENWEATHER_API_KEY"))?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(city, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                error!("weather request failed: {e}");
                ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_failure(status, response).await);
        }

        let raw: OwResponse = response.json().await.map_err(|e| {
            error!("undecodable weather response: {e}");
            ApiError::UpstreamUnavailable(FALLBACK_MESSAGE)
        })?;

        info!(city = %raw.name, country = %raw.sys.country, "weather resolved");
        Ok(raw.into_report())
    }
}

/// Maps the provider's error statuses onto the taxonomy: 404 means the city
/// is unknown, 400 a malformed request (body echoed as details), anything
/// else collapses to the unavailable fallback.
async fn classify_failure(status: StatusCode, response: reqwest::Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    error!(%status, %body, "weather provider returned an error");

    match status {
        StatusCode::NOT_FOUND => ApiError::UpstreamNotFound,
        StatusCode::BAD_REQUEST => {
            let details = serde_json::from_str(&body).unwrap_or(Value::String(body));
            ApiError::UpstreamBadRequest(details)
        }
        _ => ApiError::UpstreamUnavailable(FALLBACK_MESSAGE),
    }
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwCondition>,
    wind: OwWind,
    sys: OwSys,
    rain: Option<OwRain>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "3h")]
    last_3h: Option<f64>,
}

impl OwResponse {
    /// Total remapping into the normalized report: a missing condition array
    /// yields empty description/icon, missing rain data defaults to 0.
    fn into_report(self) -> WeatherReport {
        let (description, icon) = self
            .weather
            .into_iter()
            .next()
            .map(|c| (c.description, c.icon))
            .unwrap_or_default();

        WeatherReport {
            city: self.name,
            country: self.sys.country,
            coords: Coords {
                lat: self.coord.lat,
                lon: self.coord.lon,
            },
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            description,
            icon,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
            rain_3h: self.rain.and_then(|r| r.last_3h).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!({
            "name": "Paris",
            "coord": { "lat": 48.8566, "lon": 2.3522 },
            "main": { "temp": 18.4, "feels_like": 17.9, "humidity": 62, "pressure": 1014 },
            "weather": [{ "description": "light rain", "icon": "10d", "main": "Rain", "id": 500 }],
            "wind": { "speed": 4.1, "deg": 230 },
            "sys": { "country": "FR" },
            "rain": { "3h": 0.6 }
        })
    }

    #[test]
    fn full_response_maps_every_field() {
        let raw: OwResponse = serde_json::from_value(sample_response()).unwrap();
        let report = raw.into_report();

        assert_eq!(report.city, "Paris");
        assert_eq!(report.country, "FR");
        assert!(report.coords.lat.is_finite() && report.coords.lon.is_finite());
        assert_eq!(report.temperature, 18.4);
        assert_eq!(report.feels_like, 17.9);
        assert_eq!(report.description, "light rain");
        assert_eq!(report.icon, "10d");
        assert_eq!(report.humidity, 62);
        assert_eq!(report.pressure, 1014);
        assert_eq!(report.wind_speed, 4.1);
        assert_eq!(report.rain_3h, 0.6);
    }

    #[test]
    fn missing_condition_array_and_rain_default() {
        let mut value = sample_response();
        value.as_object_mut().unwrap().remove("weather");
        value.as_object_mut().unwrap().remove("rain");

        let raw: OwResponse = serde_json::from_value(value).unwrap();
        let report = raw.into_report();

        assert_eq!(report.description, "");
        assert_eq!(report.icon, "");
        assert_eq!(report.rain_3h, 0.0);
    }

    #[test]
    fn rain_object_without_3h_defaults_to_zero() {
        let mut value = sample_response();
        value["rain"] = json!({ "1h": 0.2 });

        let raw: OwResponse = serde_json::from_value(value).unwrap();
        assert_eq!(raw.into_report().rain_3h, 0.0);
    }
}
