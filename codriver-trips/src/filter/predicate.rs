//! Filter predicate.

use crate::domain::{Trip, classify_time_slot};

use super::config::FilterConfig;

/// Whether a trip satisfies every clause of the filter.
///
/// Clauses: origin text, destination text, exact date, and (when any slots
/// are selected) time slot. A trip whose time cannot be classified never
/// matches a slot filter, unlike the upcoming cutoff which keeps such trips.
pub fn matches(trip: &Trip, config: &FilterConfig) -> bool {
    contains_folded(&trip.from_location, &config.from_text)
        && contains_folded(&trip.to_location, &config.to_text)
        && trip.trip_date == config.target_date
        && matches_slots(trip, config)
}

fn matches_slots(trip: &Trip, config: &FilterConfig) -> bool {
    if config.time_slots.is_empty() {
        return true;
    }
    classify_time_slot(trip.time()).is_some_and(|slot| config.time_slots.contains(&slot))
}

/// Case-insensitive substring test; an empty needle always matches.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimeSlot, TripId};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn pune_mumbai(time: &str) -> Trip {
        Trip::new(TripId::parse("t1").unwrap(), "Pune Station", "Mumbai Central", date())
            .with_time(time)
    }

    fn matching_config() -> FilterConfig {
        FilterConfig::new(date())
            .with_from("pune")
            .with_to("MUMBAI")
            .with_slots([TimeSlot::Morning])
    }

    #[test]
    fn all_clauses_hold() {
        assert!(matches(&pune_mumbai("9:00 AM"), &matching_config()));
    }

    #[test]
    fn each_clause_can_fail_alone() {
        let trip = pune_mumbai("9:00 AM");

        let config = matching_config().with_from("Nashik");
        assert!(!matches(&trip, &config));

        let config = matching_config().with_to("Goa");
        assert!(!matches(&trip, &config));

        let mut config = matching_config();
        config.target_date = date().succ_opt().unwrap();
        assert!(!matches(&trip, &config));

        let config = matching_config().with_slots([TimeSlot::Evening]);
        assert!(!matches(&trip, &config));
    }

    #[test]
    fn empty_texts_are_wildcards() {
        let config = FilterConfig::new(date());
        assert!(matches(&pune_mumbai("9:00 AM"), &config));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let config = FilterConfig::new(date()).with_from("NE ST").with_to("bai cen");
        assert!(matches(&pune_mumbai("9:00 AM"), &config));
    }

    #[test]
    fn any_selected_slot_matches() {
        let config =
            FilterConfig::new(date()).with_slots([TimeSlot::Night, TimeSlot::Afternoon]);
        assert!(matches(&pune_mumbai("3:00 PM"), &config));
        assert!(matches(&pune_mumbai("2:00 AM"), &config));
        assert!(!matches(&pune_mumbai("9:00 AM"), &config));
    }

    #[test]
    fn missing_time_never_matches_a_slot_filter() {
        let trip = Trip::new(TripId::parse("t2").unwrap(), "Pune", "Mumbai", date());
        let config = FilterConfig::new(date()).with_slots(TimeSlot::ALL);
        assert!(!matches(&trip, &config));

        // Without slot filtering the same trip matches
        assert!(matches(&trip, &FilterConfig::new(date())));
    }

    #[test]
    fn unreadable_time_counts_as_night() {
        let config = FilterConfig::new(date()).with_slots([TimeSlot::Night]);
        assert!(matches(&pune_mumbai("banana"), &config));
    }

    #[test]
    fn twenty_four_hour_time_is_bucketed() {
        let config = FilterConfig::new(date()).with_slots([TimeSlot::Evening]);
        assert!(matches(&pune_mumbai("19:45"), &config));
    }
}
