//! Trip source client.
//!
//! The trip board does not own any trip data. It reads three things from an
//! external trip API:
//! - the open trips (`GET /trips`)
//! - the current user's co-driver requests (`GET /driver-requests`)
//! - the current user's co-driver registration (`GET /drivers/{id}/status`)
//!
//! A file-backed mock with the same interface serves offline development.

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{TripApiClient, TripApiConfig};
pub use convert::{ConversionError, parse_trip_date};
pub use error::ApiError;
pub use mock::MockTripSource;
pub use source::{DataSource, TripSource};
pub use types::{InvalidTripFilterKind, TripFilterKind};
