//! Current-location lookup.
//!
//! The device flow is: check location services, ask for permission, read a
//! position, reverse geocode it. Any step can stop the flow, and each stop is
//! a [`LocationError`]. Whether the user hears about it is decided by the
//! [`Trigger`] of the lookup.

use std::future::Future;

use serde::Serialize;
use tracing::debug;

use crate::notice::{Notice, Trigger};
use crate::places::{PlaceLookup, PlacesError};

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Reasons a location lookup stops.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location services are disabled")]
    Disabled,

    #[error("location permission was denied")]
    PermissionDenied,

    #[error("current position unavailable: {message}")]
    Unavailable { message: String },

    #[error("reverse geocoding failed: {0}")]
    Geocode(#[from] PlacesError),

    #[error("no address found for the current position")]
    NoMatch,
}

/// Source of the device position.
pub trait LocationProvider: Send + Sync {
    /// Whether location services are switched on.
    fn services_enabled(&self) -> impl Future<Output = bool> + Send;

    /// Ask for permission. `true` when granted.
    fn request_permission(&self) -> impl Future<Output = bool> + Send;

    fn current_position(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Provider that always reports the same configured position.
///
/// With no position configured it behaves like a device with location
/// services turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    coords: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(coords: Option<Coordinates>) -> Self {
        Self { coords }
    }

    pub fn at(lat: f64, lng: f64) -> Self {
        Self::new(Some(Coordinates { lat, lng }))
    }
}

impl LocationProvider for FixedLocation {
    async fn services_enabled(&self) -> bool {
        self.coords.is_some()
    }

    async fn request_permission(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.coords.ok_or_else(|| LocationError::Unavailable {
            message: "no position configured".to_string(),
        })
    }
}

/// Result of a location lookup as the presentation layer sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Run the full flow and return the display name of the current place.
pub async fn locate_city<P, G>(provider: &P, geocoder: &G) -> Result<String, LocationError>
where
    P: LocationProvider,
    G: PlaceLookup,
{
    if !provider.services_enabled().await {
        return Err(LocationError::Disabled);
    }
    if !provider.request_permission().await {
        return Err(LocationError::PermissionDenied);
    }

    let position = provider.current_position().await?;
    debug!(lat = position.lat, lng = position.lng, "reverse geocoding current position");

    let place = geocoder
        .reverse_geocode(position.lat, position.lng)
        .await?
        .ok_or(LocationError::NoMatch)?;

    Ok(place.display_value().to_string())
}

/// [`locate_city`], with failures handled according to `trigger`.
pub async fn resolve_city<P, G>(provider: &P, geocoder: &G, trigger: Trigger) -> LocationOutcome
where
    P: LocationProvider,
    G: PlaceLookup,
{
    match locate_city(provider, geocoder).await {
        Ok(city) => LocationOutcome {
            city: Some(city),
            notice: None,
        },
        Err(e) => LocationOutcome {
            city: None,
            notice: trigger.surface("Detect location", &e),
        },
    }
}
