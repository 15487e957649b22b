//! Trip filtering and temporal bucketing.
//!
//! Pure functions that decide which trips the board shows and in what order:
//!
//! 1. [`upcoming_trips`] drops trips that have already left,
//! 2. [`matches`] applies the user's location, date and time-slot filters,
//! 3. [`sort_trips`] orders the result.
//!
//! Nothing here reads a clock or mutates its input; the current time is
//! always a parameter.

mod config;
mod predicate;
mod sort;
mod upcoming;

pub use config::{FilterConfig, InvalidSortMode, SortMode};
pub use predicate::matches;
pub use sort::sort_trips;
pub use upcoming::{is_upcoming, upcoming_trips};

use chrono::NaiveDateTime;

use crate::domain::Trip;

/// Trips to display at `now` under `config`, in display order.
pub fn display_trips<'a>(
    now: NaiveDateTime,
    trips: &'a [Trip],
    config: &FilterConfig,
) -> Vec<&'a Trip> {
    let filtered: Vec<&Trip> = upcoming_trips(now, trips)
        .into_iter()
        .filter(|t| matches(t, config))
        .collect();
    sort_trips(filtered, config.sort_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateSelector, TimeSlot, TripId};
    use chrono::{NaiveDate, NaiveTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    }

    fn trip(id: &str, date: NaiveDate, time: &str, from: &str, to: &str) -> Trip {
        Trip::new(TripId::parse(id).unwrap(), from, to, date).with_time(time)
    }

    fn tomorrow_trips() -> Vec<Trip> {
        let tomorrow = DateSelector::Tomorrow.resolve(today());
        vec![
            trip("pm", tomorrow, "3:00 PM", "Pune", "Mumbai"),
            trip("am", tomorrow, "9:00 AM", "Pune", "Mumbai"),
        ]
    }

    fn ids(trips: &[&Trip]) -> Vec<String> {
        trips.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn earliest_departure_orders_tomorrow() {
        let trips = tomorrow_trips();
        let config = FilterConfig::for_selector(DateSelector::Tomorrow, today())
            .with_sort(SortMode::EarliestDeparture);

        assert_eq!(ids(&display_trips(now(), &trips, &config)), vec!["am", "pm"]);
    }

    #[test]
    fn afternoon_slot_keeps_only_the_afternoon_trip() {
        let trips = tomorrow_trips();
        let config = FilterConfig::for_selector(DateSelector::Tomorrow, today())
            .with_slots([TimeSlot::Afternoon])
            .with_sort(SortMode::EarliestDeparture);

        assert_eq!(ids(&display_trips(now(), &trips, &config)), vec!["pm"]);
    }

    #[test]
    fn departed_trips_today_are_hidden() {
        let trips = vec![
            trip("gone", today(), "8:00 AM", "Pune", "Mumbai"),
            trip("soon", today(), "11:00 AM", "Pune", "Mumbai"),
            trip("later", today(), "6:30 PM", "Pune", "Nashik"),
        ];
        let config = FilterConfig::new(today()).with_sort(SortMode::LatestDeparture);

        assert_eq!(
            ids(&display_trips(now(), &trips, &config)),
            vec!["later", "soon"]
        );
    }

    #[test]
    fn location_filters_apply_after_cutoff() {
        let trips = vec![
            trip("a", today(), "11:00 AM", "Pune", "Mumbai"),
            trip("b", today(), "11:30 AM", "Pune", "Nashik"),
            trip("c", today(), "12:00 PM", "Satara", "Mumbai"),
        ];
        let config = FilterConfig::new(today()).with_from("pune").with_to("mum");

        assert_eq!(ids(&display_trips(now(), &trips, &config)), vec!["a"]);
    }

    #[test]
    fn other_days_are_not_shown() {
        let trips = tomorrow_trips();
        let config = FilterConfig::new(today());
        assert!(display_trips(now(), &trips, &config).is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let trips = tomorrow_trips();
        let before = trips.clone();
        let config = FilterConfig::for_selector(DateSelector::Tomorrow, today())
            .with_sort(SortMode::EarliestDeparture);
        let _ = display_trips(now(), &trips, &config);
        assert_eq!(trips, before);
    }
}
