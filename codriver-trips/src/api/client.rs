//! Trip API HTTP client.
//!
//! Provides async methods for the three calls the trip board makes against
//! the trip source: listing trips, listing the user's driver requests, and
//! reading the user's driver registration status.

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{DriverRequest, DriverStatus, Trip};

use super::convert::{convert_driver_status, convert_requests, convert_trips};
use super::error::ApiError;
use super::types::{DriverStatusDto, ListRequestsResponse, ListTripsResponse, TripFilterKind};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the trip API client.
#[derive(Debug, Clone)]
pub struct TripApiConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    /// Bearer token sent with every request, if the source requires one
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TripApiConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the trip source.
#[derive(Debug, Clone)]
pub struct TripApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TripApiClient {
    /// Create a new trip API client.
    pub fn new(config: TripApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::Api {
                status: 0,
                message: format!("Invalid base URL: {}", config.base_url),
            })?;

        let mut headers = HeaderMap::new();

        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ApiError::Api {
                    status: 0,
                    message: "Invalid API token format".to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// List trips visible to `user_id`.
    pub async fn list_trips(
        &self,
        kind: TripFilterKind,
        user_id: &str,
    ) -> Result<Vec<Trip>, ApiError> {
        let response: ListTripsResponse = self
            .get_json(&["trips"], &[("filter", kind.as_str()), ("userId", user_id)])
            .await?;
        debug!(count = response.trips.len(), "fetched trips");
        Ok(convert_trips(&response.trips))
    }

    /// List the driver requests `user_id` has made.
    pub async fn list_driver_requests(&self, user_id: &str) -> Result<Vec<DriverRequest>, ApiError> {
        let response: ListRequestsResponse = self
            .get_json(&["driver-requests"], &[("userId", user_id)])
            .await?;
        debug!(count = response.requests.len(), "fetched driver requests");
        Ok(convert_requests(&response.requests))
    }

    /// Registration status of `user_id` as a co-driver.
    pub async fn driver_status(&self, user_id: &str) -> Result<DriverStatus, ApiError> {
        let dto: DriverStatusDto = self
            .get_json(&["drivers", user_id, "status"], &[])
            .await?;
        Ok(convert_driver_status(&dto))
    }

    /// The base URL extended by `segments`, each one percent-encoded.
    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url_for(segments);

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
