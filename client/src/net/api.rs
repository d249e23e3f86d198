//! REST client for the Remote API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! access token sent as a bearer credential.
//! Server-side (SSR): every call returns `ApiError::Unavailable`; data is only
//! fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` so pages can render a message instead of
//! panicking. Nothing is retried automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnomalyCurvePoint, AnomalyRecord, Credentials, MlMetrics, SensorReading, TokenPair};
use crate::session::TokenStore;

/// Base URL used when `AGRIMON_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Base URL of the Remote API baked in at compile time.
#[must_use]
pub fn configured_base_url() -> &'static str {
    option_env!("AGRIMON_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// No HTTP transport in this build (server-side rendering).
    #[error("remote API is not available during server rendering")]
    Unavailable,
}

/// API endpoints relative to the base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Token,
    SensorReadings,
    Anomalies,
    MlMetrics,
    AnomalyCurve,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Token => "/token/",
            Self::SensorReadings => "/sensor-readings/",
            Self::Anomalies => "/anomalies/",
            Self::MlMetrics => "/ml-metrics/",
            Self::AnomalyCurve => "/anomaly-curve/",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client bound to a base URL and the session's token store.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    store: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: TokenStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, store }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Exchange a username and password for a token pair.
    ///
    /// The pair is returned, not stored; the caller decides when to persist.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` when the credentials are rejected, or a
    /// network/decode error.
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(Endpoint::Token))
                .json(credentials)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.json::<TokenPair>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch sensor readings, optionally narrowed to one plot server-side.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request fails or the body does not decode.
    pub async fn sensor_readings(&self, plot: Option<&str>) -> Result<Vec<SensorReading>, ApiError> {
        let query: Vec<(&str, &str)> = plot.map(|p| ("plot", p)).into_iter().collect();
        self.get_json(Endpoint::SensorReadings, &query).await
    }

    /// Fetch all anomaly records.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request fails or the body does not decode.
    pub async fn anomalies(&self) -> Result<Vec<AnomalyRecord>, ApiError> {
        self.get_json(Endpoint::Anomalies, &[]).await
    }

    /// Fetch the detector evaluation summary.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request fails or the body does not decode.
    pub async fn ml_metrics(&self) -> Result<MlMetrics, ApiError> {
        self.get_json(Endpoint::MlMetrics, &[]).await
    }

    /// Fetch the anomalies-over-time series.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request fails or the body does not decode.
    pub async fn anomaly_curve(&self) -> Result<Vec<AnomalyCurvePoint>, ApiError> {
        self.get_json(Endpoint::AnomalyCurve, &[]).await
    }

    async fn get_json<T>(&self, endpoint: Endpoint, query: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(endpoint)).query(query.iter().copied());
            if let Some(token) = self.store.access().filter(|t| !t.is_empty()) {
                request = request.header("Authorization", &bearer_header(&token));
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                log::warn!("GET {} failed: {}", endpoint.path(), resp.status());
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, query, &self.store);
            Err(ApiError::Unavailable)
        }
    }
}
