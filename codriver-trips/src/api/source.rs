//! The trip source seam.

use std::future::Future;

use crate::domain::{DriverRequest, DriverStatus, Trip};

use super::client::TripApiClient;
use super::error::ApiError;
use super::mock::MockTripSource;
use super::types::TripFilterKind;

/// Trait for providing trips, requests and driver status.
///
/// This abstraction allows the trip board to be tested with scripted data.
pub trait TripSource: Send + Sync {
    /// Trips visible to `user_id`.
    fn list_trips(
        &self,
        kind: TripFilterKind,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Trip>, ApiError>> + Send;

    /// Requests `user_id` has made.
    fn list_driver_requests(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<DriverRequest>, ApiError>> + Send;

    /// Registration status of `user_id`.
    fn driver_status(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<DriverStatus, ApiError>> + Send;
}

impl TripSource for TripApiClient {
    async fn list_trips(&self, kind: TripFilterKind, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        TripApiClient::list_trips(self, kind, user_id).await
    }

    async fn list_driver_requests(&self, user_id: &str) -> Result<Vec<DriverRequest>, ApiError> {
        TripApiClient::list_driver_requests(self, user_id).await
    }

    async fn driver_status(&self, user_id: &str) -> Result<DriverStatus, ApiError> {
        TripApiClient::driver_status(self, user_id).await
    }
}

impl TripSource for MockTripSource {
    async fn list_trips(&self, kind: TripFilterKind, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        MockTripSource::list_trips(self, kind, user_id).await
    }

    async fn list_driver_requests(&self, user_id: &str) -> Result<Vec<DriverRequest>, ApiError> {
        MockTripSource::list_driver_requests(self, user_id).await
    }

    async fn driver_status(&self, user_id: &str) -> Result<DriverStatus, ApiError> {
        MockTripSource::driver_status(self, user_id).await
    }
}

/// Either the live trip API or the mock, chosen at startup.
#[derive(Debug, Clone)]
pub enum DataSource {
    Live(TripApiClient),
    Mock(MockTripSource),
}

impl TripSource for DataSource {
    async fn list_trips(&self, kind: TripFilterKind, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        match self {
            DataSource::Live(client) => client.list_trips(kind, user_id).await,
            DataSource::Mock(mock) => mock.list_trips(kind, user_id).await,
        }
    }

    async fn list_driver_requests(&self, user_id: &str) -> Result<Vec<DriverRequest>, ApiError> {
        match self {
            DataSource::Live(client) => client.list_driver_requests(user_id).await,
            DataSource::Mock(mock) => mock.list_driver_requests(user_id).await,
        }
    }

    async fn driver_status(&self, user_id: &str) -> Result<DriverStatus, ApiError> {
        match self {
            DataSource::Live(client) => client.driver_status(user_id).await,
            DataSource::Mock(mock) => mock.driver_status(user_id).await,
        }
    }
}
