//! Trip API response DTOs.
//!
//! These types map directly to the trip source's JSON responses. Fields the
//! source is known to omit are optional or defaulted; conversion into domain
//! types happens in `convert`.

use std::str::FromStr;

use serde::Deserialize;

use crate::domain::ApprovalStatus;

/// Which trips the source should list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripFilterKind {
    /// Every open trip.
    All,
    /// Open trips from today onwards.
    #[default]
    Upcoming,
}

impl TripFilterKind {
    /// Value of the `filter` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripFilterKind::All => "all",
            TripFilterKind::Upcoming => "upcoming",
        }
    }
}

/// Error returned when parsing an unknown trip filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trip filter: {0}")]
pub struct InvalidTripFilterKind(String);

impl FromStr for TripFilterKind {
    type Err = InvalidTripFilterKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TripFilterKind::All),
            "upcoming" => Ok(TripFilterKind::Upcoming),
            _ => Err(InvalidTripFilterKind(s.to_string())),
        }
    }
}

/// Response from `GET /trips`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTripsResponse {
    #[serde(default)]
    pub trips: Vec<TripDto>,
}

/// A posted trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub from_location: String,

    #[serde(default)]
    pub to_location: String,

    /// "YYYY-MM-DD" or an RFC 3339 timestamp.
    pub trip_date: String,

    /// Free text, usually "H:MM AM/PM".
    pub trip_time: Option<String>,

    pub owner: Option<OwnerDto>,
}

/// Profile of the trip's owner.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerDto {
    #[serde(default)]
    pub name: String,

    pub image: Option<String>,
}

/// Response from `GET /driver-requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRequestsResponse {
    #[serde(default)]
    pub requests: Vec<RequestDto>,
}

/// A co-driver application.
///
/// `status` stays a string so one unknown value does not fail the whole list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub trip_id: String,
    pub status: String,
}

/// Response from `GET /drivers/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatusDto {
    #[serde(default)]
    pub is_registered: bool,

    /// Absent for users who never registered.
    pub approval_status: Option<ApprovalStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_trips() {
        let json = r#"{
            "trips": [
                {
                    "_id": "t1",
                    "fromLocation": "Pune",
                    "toLocation": "Mumbai",
                    "tripDate": "2026-10-15T00:00:00.000Z",
                    "tripTime": "9:00 AM",
                    "owner": { "name": "Asha", "image": "https://img.example/a.png" }
                },
                {
                    "id": "t2",
                    "fromLocation": "Pune",
                    "toLocation": "Nashik",
                    "tripDate": "2026-10-16"
                }
            ]
        }"#;

        let response: ListTripsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.trips.len(), 2);
        assert_eq!(response.trips[0].id, "t1");
        assert_eq!(response.trips[0].trip_time.as_deref(), Some("9:00 AM"));
        assert_eq!(
            response.trips[0].owner.as_ref().map(|o| o.name.as_str()),
            Some("Asha")
        );
        assert!(response.trips[1].trip_time.is_none());
        assert!(response.trips[1].owner.is_none());
    }

    #[test]
    fn missing_trips_field_is_empty() {
        let response: ListTripsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.trips.is_empty());
    }

    #[test]
    fn deserialize_requests() {
        let json = r#"{"requests": [{"tripId": "t1", "status": "accepted"}]}"#;
        let response: ListRequestsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.requests[0].trip_id, "t1");
        assert_eq!(response.requests[0].status, "accepted");
    }

    #[test]
    fn deserialize_driver_status() {
        let json = r#"{"isRegistered": true, "approvalStatus": "approved"}"#;
        let status: DriverStatusDto = serde_json::from_str(json).unwrap();
        assert!(status.is_registered);
        assert_eq!(status.approval_status, Some(ApprovalStatus::Approved));

        let status: DriverStatusDto = serde_json::from_str(r#"{"isRegistered": false}"#).unwrap();
        assert!(!status.is_registered);
        assert!(status.approval_status.is_none());
    }

    #[test]
    fn filter_kind_query_values() {
        assert_eq!(TripFilterKind::All.as_str(), "all");
        assert_eq!(TripFilterKind::Upcoming.as_str(), "upcoming");
        assert_eq!(TripFilterKind::default(), TripFilterKind::Upcoming);
    }

    #[test]
    fn parse_filter_kind() {
        assert_eq!("all".parse(), Ok(TripFilterKind::All));
        assert_eq!(" Upcoming ".parse(), Ok(TripFilterKind::Upcoming));
        assert!("recent".parse::<TripFilterKind>().is_err());
    }
}
