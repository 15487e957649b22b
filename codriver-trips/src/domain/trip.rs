//! Trip records posted by trip owners.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Error returned when a trip identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: must not be empty")]
pub struct InvalidTripId;

/// Identifier of a posted trip, as assigned by the trip source.
///
/// Never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    /// Parse a trip identifier. Surrounding whitespace is removed.
    pub fn parse(s: &str) -> Result<Self, InvalidTripId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidTripId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display profile of the person who posted a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerProfile {
    pub name: String,
    pub image: Option<String>,
}

/// A posted ride looking for a co-driver.
///
/// The filtering engine only reads `from_location`, `to_location`,
/// `trip_date` and `trip_time`; the owner is carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub id: TripId,

    /// Free-text origin, e.g. "Pune".
    pub from_location: String,

    /// Free-text destination.
    pub to_location: String,

    /// Calendar date of departure.
    pub trip_date: NaiveDate,

    /// Free-text departure time, usually "H:MM AM/PM".
    pub trip_time: Option<String>,

    pub owner: Option<OwnerProfile>,
}

impl Trip {
    /// Create a trip with no time and no owner.
    pub fn new(
        id: TripId,
        from_location: impl Into<String>,
        to_location: impl Into<String>,
        trip_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            from_location: from_location.into(),
            to_location: to_location.into(),
            trip_date,
            trip_time: None,
            owner: None,
        }
    }

    /// Set the departure time text.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.trip_time = Some(time.into());
        self
    }

    /// Set the owner profile.
    pub fn with_owner(mut self, owner: OwnerProfile) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Departure time text, if any.
    pub fn time(&self) -> Option<&str> {
        self.trip_time.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn trip_id_trims() {
        let id = TripId::parse("  abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(format!("{id:?}"), "TripId(abc123)");
    }

    #[test]
    fn trip_id_rejects_empty() {
        assert_eq!(TripId::parse(""), Err(InvalidTripId));
        assert_eq!(TripId::parse("   "), Err(InvalidTripId));
    }

    #[test]
    fn builder_sets_optional_fields() {
        let trip = Trip::new(TripId::parse("t1").unwrap(), "Pune", "Mumbai", date())
            .with_time("9:00 AM")
            .with_owner(OwnerProfile {
                name: "Asha".to_string(),
                image: None,
            });

        assert_eq!(trip.time(), Some("9:00 AM"));
        assert_eq!(trip.owner.as_ref().map(|o| o.name.as_str()), Some("Asha"));
    }

    #[test]
    fn new_trip_has_no_time() {
        let trip = Trip::new(TripId::parse("t1").unwrap(), "Pune", "Mumbai", date());
        assert_eq!(trip.time(), None);
        assert!(trip.owner.is_none());
    }

    #[test]
    fn serializes_id_as_plain_string() {
        let trip = Trip::new(TripId::parse("t9").unwrap(), "A", "B", date());
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["id"], "t9");
        assert_eq!(json["trip_date"], "2026-10-14");
    }
}
