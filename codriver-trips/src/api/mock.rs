//! Mock trip source for running without a live trip API.
//!
//! Loads fixed responses from JSON files in a directory and serves them as if
//! they were live API responses.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{DriverRequest, DriverStatus, Trip};

use super::convert::{convert_driver_status, convert_requests, convert_trips};
use super::error::ApiError;
use super::types::{DriverStatusDto, ListRequestsResponse, ListTripsResponse, TripFilterKind};

/// Data loaded for the mock source.
#[derive(Debug)]
struct MockData {
    trips: Vec<Trip>,
    requests: Vec<DriverRequest>,
    status: Option<DriverStatus>,
}

/// Trip source that serves data from JSON files.
///
/// Expects these files in the directory, in the trip API's response shapes:
/// - `trips.json` (required)
/// - `requests.json` (optional, no requests when absent)
/// - `status.json` (optional, status calls fail when absent)
#[derive(Debug, Clone)]
pub struct MockTripSource {
    data: Arc<MockData>,
}

impl MockTripSource {
    /// Load mock data from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let data_dir = data_dir.as_ref();

        let trips: ListTripsResponse = read_json(&data_dir.join("trips.json"))?.ok_or_else(|| {
            ApiError::Mock {
                message: format!("no trips.json in {:?}", data_dir),
            }
        })?;

        let requests: ListRequestsResponse = read_json(&data_dir.join("requests.json"))?
            .unwrap_or(ListRequestsResponse {
                requests: Vec::new(),
            });

        let status: Option<DriverStatusDto> = read_json(&data_dir.join("status.json"))?;

        Ok(Self {
            data: Arc::new(MockData {
                trips: convert_trips(&trips.trips),
                requests: convert_requests(&requests.requests),
                status: status.as_ref().map(convert_driver_status),
            }),
        })
    }

    /// List trips. Filter kind and user are ignored; mock data is static.
    pub async fn list_trips(
        &self,
        _kind: TripFilterKind,
        _user_id: &str,
    ) -> Result<Vec<Trip>, ApiError> {
        Ok(self.data.trips.clone())
    }

    /// List driver requests. The user is ignored.
    pub async fn list_driver_requests(
        &self,
        _user_id: &str,
    ) -> Result<Vec<DriverRequest>, ApiError> {
        Ok(self.data.requests.clone())
    }

    /// Driver status from `status.json`.
    pub async fn driver_status(&self, _user_id: &str) -> Result<DriverStatus, ApiError> {
        self.data.status.ok_or_else(|| ApiError::Mock {
            message: "no status.json in mock data".to_string(),
        })
    }
}

/// Read and parse a JSON file. A missing file is `Ok(None)`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ApiError> {
    if !path.is_file() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(path).map_err(|e| ApiError::Mock {
        message: format!("failed to read {:?}: {}", path, e),
    })?;

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| ApiError::Mock {
            message: format!("failed to parse {:?}: {}", path, e),
        })
}
