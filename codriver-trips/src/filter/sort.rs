//! Trip ordering for display.

use crate::domain::{Trip, departure_minutes};

use super::config::SortMode;

/// Order trips for display.
///
/// Departure sorts key on minutes since midnight of the 12-hour time; trips
/// without one sort as midnight. Sorting is stable, so equal keys keep their
/// input order in both directions, and `Relevance` leaves the input as is.
pub fn sort_trips<'a>(mut trips: Vec<&'a Trip>, mode: SortMode) -> Vec<&'a Trip> {
    match mode {
        SortMode::Relevance => {}
        SortMode::EarliestDeparture => {
            trips.sort_by_key(|t| departure_minutes(t.time()));
        }
        SortMode::LatestDeparture => {
            trips.sort_by(|a, b| departure_minutes(b.time()).cmp(&departure_minutes(a.time())));
        }
    }
    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TripId;
    use chrono::NaiveDate;

    fn trip(id: &str, time: Option<&str>) -> Trip {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let trip = Trip::new(TripId::parse(id).unwrap(), "Pune", "Mumbai", date);
        match time {
            Some(t) => trip.with_time(t),
            None => trip,
        }
    }

    fn ids(trips: &[&Trip]) -> Vec<String> {
        trips.iter().map(|t| t.id.to_string()).collect()
    }

    fn sample() -> Vec<Trip> {
        vec![
            trip("c", Some("3:00 PM")),
            trip("a", Some("9:00 AM")),
            trip("n", None),
            trip("e", Some("11:00 PM")),
            trip("b", Some("9:00 AM")),
        ]
    }

    #[test]
    fn relevance_keeps_input_order() {
        let trips = sample();
        let sorted = sort_trips(trips.iter().collect(), SortMode::Relevance);
        assert_eq!(ids(&sorted), vec!["c", "a", "n", "e", "b"]);
    }

    #[test]
    fn earliest_first() {
        let trips = sample();
        let sorted = sort_trips(trips.iter().collect(), SortMode::EarliestDeparture);
        assert_eq!(ids(&sorted), vec!["n", "a", "b", "c", "e"]);
    }

    #[test]
    fn latest_first_keeps_ties_in_input_order() {
        let trips = sample();
        let sorted = sort_trips(trips.iter().collect(), SortMode::LatestDeparture);
        assert_eq!(ids(&sorted), vec!["e", "c", "a", "b", "n"]);
    }

    #[test]
    fn unreadable_times_sort_as_midnight() {
        let trips = vec![
            trip("late", Some("1:00 AM")),
            trip("bare", Some("14:00")),
            trip("junk", Some("banana")),
            trip("midnight", Some("12:00 AM")),
        ];
        let sorted = sort_trips(trips.iter().collect(), SortMode::EarliestDeparture);
        assert_eq!(ids(&sorted), vec!["bare", "junk", "midnight", "late"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let trips = sample();
        for mode in SortMode::ALL {
            let once = sort_trips(trips.iter().collect(), mode);
            let twice = sort_trips(once.clone(), mode);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn input_is_untouched() {
        let trips = sample();
        let before = trips.clone();
        let _ = sort_trips(trips.iter().collect(), SortMode::LatestDeparture);
        assert_eq!(trips, before);
    }
}
