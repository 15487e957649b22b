//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::TripListing;
use crate::domain::{
    ApprovalStatus, DateSelector, DriverStatus, InvalidDateSelector, InvalidTimeSlot,
    RequestStatus, TimeSlot,
};
use crate::filter::{FilterConfig, InvalidSortMode, SortMode};
use crate::notice::{Notice, Trigger};
use crate::places::{PlaceDetails, Suggestion};

/// Filter parameters for the trip list.
///
/// Every field is optional; an empty query shows today's trips in source
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripQuery {
    /// Substring of the departure location
    pub from: Option<String>,

    /// Substring of the arrival location
    pub to: Option<String>,

    /// `today`, `tomorrow` or `YYYY-MM-DD`
    pub date: Option<String>,

    /// Comma-separated slot names, e.g. `morning,evening`
    pub slots: Option<String>,

    /// `relevance`, `earliest` or `latest`
    pub sort: Option<String>,
}

/// A query parameter that did not parse.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Date(#[from] InvalidDateSelector),

    #[error(transparent)]
    Slot(#[from] InvalidTimeSlot),

    #[error(transparent)]
    Sort(#[from] InvalidSortMode),
}

impl TripQuery {
    /// Build the filter this query describes, resolving relative dates
    /// against `today`.
    pub fn to_config(&self, today: NaiveDate) -> Result<FilterConfig, QueryError> {
        let selector = match non_empty(&self.date) {
            Some(date) => date.parse::<DateSelector>()?,
            None => DateSelector::default(),
        };

        let slots = match non_empty(&self.slots) {
            Some(slots) => parse_slots(slots)?,
            None => Vec::new(),
        };

        let sort = match non_empty(&self.sort) {
            Some(sort) => sort.parse::<SortMode>()?,
            None => SortMode::default(),
        };

        Ok(FilterConfig::for_selector(selector, today)
            .with_from(self.from.clone().unwrap_or_default())
            .with_to(self.to.clone().unwrap_or_default())
            .with_slots(slots)
            .with_sort(sort))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_slots(slots: &str) -> Result<Vec<TimeSlot>, InvalidTimeSlot> {
    slots
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// A trip in list results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    pub id: String,
    pub from_location: String,
    pub to_location: String,
    /// `YYYY-MM-DD`
    pub trip_date: String,
    /// Departure time as posted, e.g. "9:00 AM"
    pub trip_time: Option<String>,
    pub time_slot: Option<TimeSlot>,
    /// The current user's request on this trip
    pub request_status: Option<RequestStatus>,
    pub owner_name: Option<String>,
}

impl TripResult {
    pub fn from_listing(listing: &TripListing) -> Self {
        let trip = &listing.trip;
        Self {
            id: trip.id.to_string(),
            from_location: trip.from_location.clone(),
            to_location: trip.to_location.clone(),
            trip_date: trip.trip_date.format("%Y-%m-%d").to_string(),
            trip_time: trip.trip_time.clone(),
            time_slot: listing.time_slot,
            request_status: listing.request_status,
            owner_name: trip.owner.as_ref().map(|o| o.name.clone()),
        }
    }
}

/// Response for the trip list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripListResponse {
    /// The resolved target date
    pub date: String,
    pub sort: SortMode,
    pub trips: Vec<TripResult>,
}

/// Response for a user-triggered refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Trips on the board after the refresh
    pub trips: usize,
    /// Set when the refresh failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Which location field is being typed into.
///
/// Each field debounces independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationField {
    #[default]
    From,
    To,
}

/// Request for place suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Text typed so far
    #[serde(default)]
    pub q: String,

    #[serde(default)]
    pub field: LocationField,
}

/// Response for place suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
    /// A newer request for the same field replaced this one
    pub superseded: bool,
}

/// Request for place details.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsRequest {
    pub place_id: String,
}

/// A resolved place, with the text to put into the location field.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub display_value: String,
}

impl From<PlaceDetails> for PlaceResult {
    fn from(place: PlaceDetails) -> Self {
        Self {
            display_value: place.display_value().to_string(),
            address: place.address,
            lat: place.lat,
            lng: place.lng,
            city: place.city,
            state: place.state,
        }
    }
}

/// Request to detect the current city.
#[derive(Debug, Default, Deserialize)]
pub struct LocationRequest {
    /// `user` for a tap on the locate button, `auto` on page load
    #[serde(default)]
    pub trigger: Trigger,
}

/// Co-driver registration status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatusResponse {
    pub is_registered: bool,
    pub approval_status: ApprovalStatus,
    pub can_apply: bool,
}

impl From<DriverStatus> for DriverStatusResponse {
    fn from(status: DriverStatus) -> Self {
        Self {
            is_registered: status.is_registered,
            approval_status: status.approval_status,
            can_apply: status.can_apply(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
