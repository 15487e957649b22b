//! Time-of-day slots used to filter trips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::time::{TwelveHourTime, leading_hour};

/// Error returned when parsing an unknown slot name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time slot: {0}")]
pub struct InvalidTimeSlot(String);

/// One of the four fixed six-hour buckets of the day.
///
/// Ordered by time of day, so a `BTreeSet<TimeSlot>` iterates night first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// 00:00 up to 06:00.
    Night,
    /// 06:00 up to 12:00.
    Morning,
    /// 12:00 up to 18:00.
    Afternoon,
    /// 18:00 through 24:00.
    Evening,
}

impl TimeSlot {
    /// All slots in time-of-day order.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Night,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
    ];

    /// Bucket an hour of the day.
    ///
    /// Hour 24 still counts as evening; anything beyond has no slot.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0..=5 => Some(TimeSlot::Night),
            6..=11 => Some(TimeSlot::Morning),
            12..=17 => Some(TimeSlot::Afternoon),
            18..=24 => Some(TimeSlot::Evening),
            _ => None,
        }
    }

    /// Lowercase identifier, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Night => "night",
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }

    /// Human-readable label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Night => "Night (12 AM - 6 AM)",
            TimeSlot::Morning => "Morning (6 AM - 12 PM)",
            TimeSlot::Afternoon => "Afternoon (12 PM - 6 PM)",
            TimeSlot::Evening => "Evening (6 PM - 12 AM)",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidTimeSlot(s.to_string()))
    }
}

/// Classify a free-text trip time into a slot.
///
/// Empty or missing text has no slot. A 12-hour "H:MM AM/PM" time is bucketed
/// by its normalised hour; any other text is read as 24-hour by its leading
/// hour digits, and text without digits reads as hour 0 (night).
///
/// # Examples
///
/// ```
/// use codriver_trips::domain::{TimeSlot, classify_time_slot};
///
/// assert_eq!(classify_time_slot(Some("6:00 AM")), Some(TimeSlot::Morning));
/// assert_eq!(classify_time_slot(Some("19:30")), Some(TimeSlot::Evening));
/// assert_eq!(classify_time_slot(None), None);
/// ```
pub fn classify_time_slot(time: Option<&str>) -> Option<TimeSlot> {
    let time = time.filter(|t| !t.is_empty())?;
    let hour = match TwelveHourTime::parse(time) {
        Ok(parsed) => parsed.hour(),
        Err(_) => leading_hour(time),
    };
    TimeSlot::from_hour(hour)
}
