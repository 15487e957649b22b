//! Application state for the web layer.

use std::sync::Arc;

use crate::api::DataSource;
use crate::board::TripBoard;
use crate::location::FixedLocation;
use crate::places::{PlacesClient, SuggestionDebouncer};

use super::dto::LocationField;

/// Places lookups, with one debouncer per location field.
pub struct Places {
    pub client: PlacesClient,
    from: SuggestionDebouncer<PlacesClient>,
    to: SuggestionDebouncer<PlacesClient>,
}

impl Places {
    pub fn new(client: PlacesClient) -> Self {
        Self {
            from: SuggestionDebouncer::new(client.clone()),
            to: SuggestionDebouncer::new(client.clone()),
            client,
        }
    }

    /// The debouncer for `field`.
    pub fn debouncer(&self, field: LocationField) -> &SuggestionDebouncer<PlacesClient> {
        match field {
            LocationField::From => &self.from,
            LocationField::To => &self.to,
        }
    }
}

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Trip board, refreshed in the background
    pub board: Arc<TripBoard<DataSource>>,

    /// Places lookups, absent without an API key
    pub places: Option<Arc<Places>>,

    /// Position used for "locate me"
    pub location: FixedLocation,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        board: Arc<TripBoard<DataSource>>,
        places: Option<PlacesClient>,
        location: FixedLocation,
    ) -> Self {
        Self {
            board,
            places: places.map(|client| Arc::new(Places::new(client))),
            location,
        }
    }
}
