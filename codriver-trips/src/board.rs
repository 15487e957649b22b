//! The trip board.
//!
//! Holds the latest trips and driver requests fetched from the trip source
//! and answers display queries against them. A refresh replaces the whole
//! snapshot; overlapping refreshes are not ordered, so whichever finishes
//! last wins. A failed refresh leaves the previous snapshot in place.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::api::{ApiError, TripFilterKind, TripSource};
use crate::domain::{
    DriverRequest, DriverStatus, RequestStatus, TimeSlot, Trip, classify_time_slot, request_for,
};
use crate::filter::{FilterConfig, display_trips};
use crate::notice::{Notice, Trigger};

/// How often the board refreshes in the background (15 seconds).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Trips and requests as of the last successful refresh.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub trips: Vec<Trip>,
    pub requests: Vec<DriverRequest>,
}

/// A trip ready for display, annotated with the user's request state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripListing {
    pub trip: Trip,
    /// The user's request against this trip, if any. Display only.
    pub request_status: Option<RequestStatus>,
    pub time_slot: Option<TimeSlot>,
}

/// Thread-safe trip board backed by a trip source.
pub struct TripBoard<S> {
    source: S,
    user_id: String,
    kind: TripFilterKind,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl<S: TripSource> TripBoard<S> {
    /// Create an empty board. Nothing is fetched until the first refresh.
    pub fn new(source: S, user_id: impl Into<String>) -> Self {
        Self {
            source,
            user_id: user_id.into(),
            kind: TripFilterKind::default(),
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Set which trips the source is asked for.
    pub fn with_kind(mut self, kind: TripFilterKind) -> Self {
        self.kind = kind;
        self
    }

    /// The user the board fetches for.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Fetch trips and requests together and replace the snapshot.
    ///
    /// Returns the number of trips now on the board.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        let (trips, requests) = futures::try_join!(
            self.source.list_trips(self.kind, &self.user_id),
            self.source.list_driver_requests(&self.user_id),
        )?;

        let count = trips.len();
        debug!(trips = count, requests = requests.len(), "replacing trip board snapshot");

        let mut guard = self.snapshot.write().await;
        *guard = Arc::new(Snapshot { trips, requests });

        Ok(count)
    }

    /// Refresh, handling failure according to what started the refresh.
    pub async fn refresh_with(&self, trigger: Trigger) -> Option<Notice> {
        match self.refresh().await {
            Ok(_) => None,
            Err(e) => trigger.surface("Load trips", &e),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.snapshot.read().await;
        Arc::clone(&guard)
    }

    /// Trips to display at `now` under `config`, in display order.
    pub async fn listings(&self, now: NaiveDateTime, config: &FilterConfig) -> Vec<TripListing> {
        let snapshot = self.snapshot().await;
        build_listings(&snapshot, now, config)
    }

    /// The user's co-driver registration status, straight from the source.
    pub async fn driver_status(&self) -> Result<DriverStatus, ApiError> {
        self.source.driver_status(&self.user_id).await
    }
}

impl<S: TripSource + 'static> TripBoard<S> {
    /// Refresh now and then every `interval` until the task is aborted.
    ///
    /// Failures are logged and never stop the loop.
    pub fn spawn_refresh_loop(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.refresh_with(Trigger::Automatic).await;
            }
        })
    }
}

/// Run the display pipeline over a snapshot and annotate the results.
pub fn build_listings(
    snapshot: &Snapshot,
    now: NaiveDateTime,
    config: &FilterConfig,
) -> Vec<TripListing> {
    let listings: Vec<TripListing> = display_trips(now, &snapshot.trips, config)
        .into_iter()
        .map(|trip| TripListing {
            trip: trip.clone(),
            request_status: request_for(&snapshot.requests, &trip.id).map(|r| r.status),
            time_slot: classify_time_slot(trip.time()),
        })
        .collect();

    debug!(
        shown = listings.len(),
        total = snapshot.trips.len(),
        "built trip listings"
    );
    listings
}
