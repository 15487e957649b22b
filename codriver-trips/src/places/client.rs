//! Google Places and Geocoding web service client.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::PlacesError;
use super::types::{
    AutocompleteResponse, DetailsResponse, GeocodeResponse, PlaceDetails, Suggestion,
    check_status,
};

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from place details. Billing is per field group.
const DETAIL_FIELDS: &str = "formatted_address,geometry,address_component";

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Anything that can look up places.
///
/// Implemented by [`PlacesClient`] and by scripted lookups in tests.
pub trait PlaceLookup: Send + Sync {
    /// Autocomplete predictions for partial text.
    fn suggest(&self, text: &str)
    -> impl Future<Output = Result<Vec<Suggestion>, PlacesError>> + Send;

    /// Details of one predicted place. `None` when the place has gone.
    fn details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<PlaceDetails>, PlacesError>> + Send;

    /// The best address match for a coordinate.
    fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = Result<Option<PlaceDetails>, PlacesError>> + Send;
}

/// Client for the Google Places and Geocoding APIs.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    /// Create a new places client.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Autocomplete predictions for `text`. No results is an empty list.
    pub async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, PlacesError> {
        let response: AutocompleteResponse = self
            .get_json("/place/autocomplete/json", &[("input", text)])
            .await?;

        if !check_status(&response.status, response.error_message.as_deref())? {
            return Ok(Vec::new());
        }

        debug!(count = response.predictions.len(), "fetched place suggestions");
        Ok(response.predictions.into_iter().map(Suggestion::from).collect())
    }

    /// Details for a place returned by [`suggest`](Self::suggest).
    pub async fn details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        let response: DetailsResponse = self
            .get_json(
                "/place/details/json",
                &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
            )
            .await?;

        if !check_status(&response.status, response.error_message.as_deref())? {
            return Ok(None);
        }

        Ok(response.result.map(PlaceDetails::from))
    }

    /// Reverse geocode a coordinate to its most specific address.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        let latlng = format!("{lat},{lng}");
        let response: GeocodeResponse = self
            .get_json("/geocode/json", &[("latlng", latlng.as_str())])
            .await?;

        if !check_status(&response.status, response.error_message.as_deref())? {
            return Ok(None);
        }

        Ok(response.results.into_iter().next().map(PlaceDetails::from))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PlacesError::Json {
            message: e.to_string(),
        })
    }
}

impl PlaceLookup for PlacesClient {
    async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, PlacesError> {
        PlacesClient::suggest(self, text).await
    }

    async fn details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        PlacesClient::details(self, place_id).await
    }

    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        PlacesClient::reverse_geocode(self, lat, lng).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PlacesConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url() {
        let config = PlacesConfig::new("test-key")
            .with_base_url("http://localhost:8080/")
            .with_timeout(3);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn client_creation() {
        assert!(PlacesClient::new(PlacesConfig::new("test-key")).is_ok());
    }
}
