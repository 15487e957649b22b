//! Conversion from trip API DTOs to domain types.
//!
//! Individual records that fail validation are skipped with a warning so one
//! malformed trip does not empty the whole board.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::domain::{
    ApprovalStatus, DriverRequest, DriverStatus, InvalidTripId, OwnerProfile, RequestStatus, Trip,
    TripId,
};

use super::types::{DriverStatusDto, RequestDto, TripDto};

/// Error converting a single DTO.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    InvalidId(#[from] InvalidTripId),

    #[error("invalid trip date: {0:?}")]
    InvalidDate(String),

    #[error("unknown request status: {0:?}")]
    UnknownStatus(String),
}

/// Parse a trip date.
///
/// Accepts "YYYY-MM-DD", an RFC 3339 timestamp, or a naive
/// "YYYY-MM-DDTHH:MM:SS" timestamp. An RFC 3339 timestamp is an instant and
/// contributes its date in the local zone, the zone the board's clock reads.
/// Naive timestamps are taken as local already.
pub fn parse_trip_date(s: &str) -> Result<NaiveDate, ConversionError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(ConversionError::InvalidDate(s.to_string()))
}

/// Convert one trip DTO.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let id = TripId::parse(&dto.id)?;
    let trip_date = parse_trip_date(&dto.trip_date)?;

    Ok(Trip {
        id,
        from_location: dto.from_location.clone(),
        to_location: dto.to_location.clone(),
        trip_date,
        trip_time: dto.trip_time.clone(),
        owner: dto.owner.as_ref().map(|o| OwnerProfile {
            name: o.name.clone(),
            image: o.image.clone(),
        }),
    })
}

/// Convert a trip list, skipping records that fail validation.
pub fn convert_trips(dtos: &[TripDto]) -> Vec<Trip> {
    dtos.iter()
        .filter_map(|dto| match convert_trip(dto) {
            Ok(trip) => Some(trip),
            Err(e) => {
                warn!(trip_id = %dto.id, error = %e, "skipping malformed trip");
                None
            }
        })
        .collect()
}

/// Parse a request status case-insensitively.
pub fn parse_request_status(s: &str) -> Result<RequestStatus, ConversionError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(RequestStatus::Pending),
        "accepted" => Ok(RequestStatus::Accepted),
        "rejected" => Ok(RequestStatus::Rejected),
        _ => Err(ConversionError::UnknownStatus(s.to_string())),
    }
}

/// Convert one request DTO.
pub fn convert_request(dto: &RequestDto) -> Result<DriverRequest, ConversionError> {
    Ok(DriverRequest::new(
        TripId::parse(&dto.trip_id)?,
        parse_request_status(&dto.status)?,
    ))
}

/// Convert a request list, skipping records that fail validation.
pub fn convert_requests(dtos: &[RequestDto]) -> Vec<DriverRequest> {
    dtos.iter()
        .filter_map(|dto| match convert_request(dto) {
            Ok(request) => Some(request),
            Err(e) => {
                warn!(trip_id = %dto.trip_id, error = %e, "skipping malformed driver request");
                None
            }
        })
        .collect()
}

/// Convert a driver status. A missing approval status reads as pending.
pub fn convert_driver_status(dto: &DriverStatusDto) -> DriverStatus {
    DriverStatus {
        is_registered: dto.is_registered,
        approval_status: dto.approval_status.unwrap_or(ApprovalStatus::Pending),
    }
}
