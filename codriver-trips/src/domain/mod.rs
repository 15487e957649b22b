//! Domain types for the co-driver trip board.
//!
//! These types represent trip data after it has been read from the trip
//! source. Identifiers validate at construction; free-text fields such as
//! trip times are kept verbatim and interpreted by the parsers in this module.

mod date;
mod driver;
mod request;
mod slot;
mod time;
mod trip;

pub use date::{DateSelector, InvalidDateSelector};
pub use driver::{ApprovalStatus, DriverStatus};
pub use request::{DriverRequest, RequestStatus, request_for};
pub use slot::{InvalidTimeSlot, TimeSlot, classify_time_slot};
pub use time::{TimeError, TwelveHourTime, departure_minutes, leading_hour, minutes_of_day};
pub use trip::{InvalidTripId, OwnerProfile, Trip, TripId};
