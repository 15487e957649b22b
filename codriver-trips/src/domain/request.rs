//! Co-driver applications against posted trips.

use serde::{Deserialize, Serialize};

use super::TripId;

/// State of a co-driver's application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Badge text shown next to a trip.
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Requested",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Declined",
        }
    }
}

/// A co-driver's application against one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRequest {
    pub trip_id: TripId,
    pub status: RequestStatus,
}

impl DriverRequest {
    pub fn new(trip_id: TripId, status: RequestStatus) -> Self {
        Self { trip_id, status }
    }
}

/// The request that applies to a trip: the first one for it in source order.
pub fn request_for<'a>(requests: &'a [DriverRequest], trip_id: &TripId) -> Option<&'a DriverRequest> {
    requests.iter().find(|r| &r.trip_id == trip_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TripId {
        TripId::parse(s).unwrap()
    }

    #[test]
    fn first_request_wins() {
        let requests = vec![
            DriverRequest::new(id("a"), RequestStatus::Rejected),
            DriverRequest::new(id("b"), RequestStatus::Pending),
            DriverRequest::new(id("b"), RequestStatus::Accepted),
        ];

        assert_eq!(
            request_for(&requests, &id("b")).map(|r| r.status),
            Some(RequestStatus::Pending)
        );
        assert_eq!(
            request_for(&requests, &id("a")).map(|r| r.status),
            Some(RequestStatus::Rejected)
        );
        assert!(request_for(&requests, &id("c")).is_none());
    }

    #[test]
    fn status_wire_names() {
        let status: RequestStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(status, RequestStatus::Accepted);
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert!(serde_json::from_str::<RequestStatus>("\"maybe\"").is_err());
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(RequestStatus::Pending.label(), RequestStatus::Accepted.label());
        assert_ne!(RequestStatus::Accepted.label(), RequestStatus::Rejected.label());
    }
}
