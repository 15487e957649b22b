//! Location autocomplete.
//!
//! Wraps the Google Places web service for type-ahead suggestions and place
//! details, plus the Geocoding API for turning coordinates into a city.
//! Suggestion lookups are debounced per input field.

mod client;
mod debounce;
mod error;
mod types;

pub use client::{PlaceLookup, PlacesClient, PlacesConfig};
pub use debounce::{Debounced, MIN_QUERY_CHARS, QUIET_PERIOD, SuggestionDebouncer};
pub use error::PlacesError;
pub use types::{PlaceDetails, Suggestion};
