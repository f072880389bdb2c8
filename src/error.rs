//! Error taxonomy shared by the provider clients and the API layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

/// Every failure a request can surface, one variant per transport status.
///
/// Provider clients classify upstream failures into this taxonomy; handlers
/// bubble the result with `?` and the `IntoResponse` impl renders the
/// status code and the `{error[, details]}` JSON body deterministically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent or blank. Carries the full
    /// user-facing message since the wording differs per endpoint.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// A provider credential is not configured. Carries the name of the
    /// missing environment variable.
    #[error("Server configuration error: {0} not set")]
    ConfigMissing(&'static str),

    /// Provider reported 404 for the requested resource (e.g. unknown city).
    #[error("Resource not found")]
    UpstreamNotFound,

    /// Provider rejected the request as malformed; the payload echoes the
    /// provider's diagnostic body as `details`.
    #[error("Bad request")]
    UpstreamBadRequest(Value),

    /// The currency provider answered with a non-success result flag; the
    /// payload is its `error-type`, when present.
    #[error("Failed to fetch currency data from provider")]
    UpstreamBadGateway(Option<String>),

    /// A currency code is absent from the provider's rate table, or the
    /// derived rate would not be a positive finite number.
    #[error("Currency rate not found")]
    RateNotFound,

    /// Transport failure or any unclassified provider error. Carries the
    /// non-leaking per-endpoint fallback message; diagnostics are logged at
    /// the classification site, never echoed to the client.
    #[error("{0}")]
    UpstreamUnavailable(&'static str),
}

impl ApiError {
    /// Transport status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::UpstreamBadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamNotFound | Self::RateNotFound => StatusCode::NOT_FOUND,
            Self::UpstreamBadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ConfigMissing(_) | Self::UpstreamUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({ "error": self.to_string() });

        match self {
            Self::UpstreamBadRequest(details) => {
                body["details"] = details;
            }
            Self::UpstreamBadGateway(details) => {
                body["details"] = details.map_or(Value::Null, Value::String);
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::MissingParameter("Missing required query parameter: city"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::ConfigMissing("OPENWEATHER_API_KEY"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ApiError::UpstreamNotFound, StatusCode::NOT_FOUND)]
    #[case(ApiError::UpstreamBadRequest(json!({"cod": "400"})), StatusCode::BAD_REQUEST)]
    #[case(ApiError::UpstreamBadGateway(Some("invalid-key".into())), StatusCode::BAD_GATEWAY)]
    #[case(ApiError::RateNotFound, StatusCode::NOT_FOUND)]
    #[case(ApiError::UpstreamUnavailable("Failed to fetch weather data"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_mapping(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status(), expected);
    }

    #[test]
    fn config_missing_names_the_variable() {
        let error = ApiError::ConfigMissing("NEWS_API_KEY");
        assert_eq!(
            error.to_string(),
            "Server configuration error: NEWS_API_KEY not set"
        );
    }

    #[tokio::test]
    async fn bad_request_body_carries_details() {
        let error = ApiError::UpstreamBadRequest(json!({"cod": "400", "message": "bad query"}));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Bad request");
        assert_eq!(body["details"]["message"], "bad query");
    }

    #[tokio::test]
    async fn not_found_body_has_no_details() {
        let response = ApiError::UpstreamNotFound.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Resource not found" }));
    }
}
