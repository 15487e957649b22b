//! Upcoming-trip cutoff.
//!
//! Drops trips that have already left. Past days are always dropped and later
//! days always kept. A trip dated today is kept unless its time is a 12-hour
//! clock time at or before the current minute; a missing or unreadable time
//! keeps the trip.

use chrono::NaiveDateTime;

use crate::domain::{Trip, TwelveHourTime, minutes_of_day};

/// Whether a single trip is still upcoming at `now`.
pub fn is_upcoming(trip: &Trip, now: NaiveDateTime) -> bool {
    let today = now.date();

    if trip.trip_date < today {
        return false;
    }
    if trip.trip_date > today {
        return true;
    }

    let Some(time) = trip.time() else {
        return true;
    };
    let Ok(departure) = TwelveHourTime::parse(time) else {
        return true;
    };

    departure.minutes_since_midnight() > minutes_of_day(now.time())
}

/// Keep the trips that are still upcoming at `now`, in their original order.
pub fn upcoming_trips(now: NaiveDateTime, trips: &[Trip]) -> Vec<&Trip> {
    trips.iter().filter(|t| is_upcoming(t, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TripId;
    use chrono::{NaiveDate, NaiveTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        today().and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn trip(id: &str, date: NaiveDate, time: Option<&str>) -> Trip {
        let trip = Trip::new(TripId::parse(id).unwrap(), "Pune", "Mumbai", date);
        match time {
            Some(t) => trip.with_time(t),
            None => trip,
        }
    }

    #[test]
    fn past_days_are_dropped_whatever_the_time() {
        let yesterday = today().pred_opt().unwrap();
        for time in [None, Some("11:59 PM"), Some("banana"), Some("23:00")] {
            assert!(!is_upcoming(&trip("t", yesterday, time), at(0, 0)));
        }
    }

    #[test]
    fn later_days_are_kept_whatever_the_time() {
        let tomorrow = today().succ_opt().unwrap();
        for time in [None, Some("12:00 AM"), Some("banana")] {
            assert!(is_upcoming(&trip("t", tomorrow, time), at(23, 59)));
        }
    }

    #[test]
    fn today_compares_against_current_minute() {
        let late = trip("t", today(), Some("11:59 PM"));
        assert!(is_upcoming(&late, at(23, 58)));
        assert!(!is_upcoming(&late, at(23, 59)));

        let now_with_seconds = today().and_time(NaiveTime::from_hms_opt(23, 58, 59).unwrap());
        assert!(is_upcoming(&late, now_with_seconds));
    }

    #[test]
    fn today_without_time_is_kept() {
        assert!(is_upcoming(&trip("t", today(), None), at(23, 59)));
    }

    #[test]
    fn today_with_unreadable_time_is_kept() {
        assert!(is_upcoming(&trip("t", today(), Some("banana")), at(23, 59)));
        // 24-hour text is not a 12-hour time, so it fails open too
        assert!(is_upcoming(&trip("t", today(), Some("08:00")), at(23, 59)));
    }

    #[test]
    fn midnight_departure_today_has_left() {
        assert!(!is_upcoming(&trip("t", today(), Some("12:00 AM")), at(0, 0)));
        assert!(!is_upcoming(&trip("t", today(), Some("12:30 AM")), at(9, 0)));
        assert!(is_upcoming(&trip("t", today(), Some("12:30 PM")), at(9, 0)));
    }

    #[test]
    fn out_of_range_hour_counts_as_later_today() {
        assert!(is_upcoming(&trip("t", today(), Some("13:00 PM")), at(23, 59)));
    }

    #[test]
    fn keeps_original_order() {
        let tomorrow = today().succ_opt().unwrap();
        let trips = vec![
            trip("a", tomorrow, Some("9:00 AM")),
            trip("b", today(), Some("8:00 AM")),
            trip("c", today(), Some("6:00 PM")),
            trip("d", today(), None),
        ];

        let ids: Vec<&str> = upcoming_trips(at(10, 0), &trips)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn empty_input() {
        assert!(upcoming_trips(at(10, 0), &[]).is_empty());
    }
}
