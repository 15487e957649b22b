//! Trip time parsing.
//!
//! Trip times arrive as free text entered by trip owners. Two shapes show up
//! in practice: a 12-hour "H:MM AM/PM" clock (the marker in any case, with or
//! without a space before it) and bare 24-hour "HH" or "HH:MM" text. All
//! cutoff, bucketing and sorting decisions go through the one parser here.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Error returned when a string is not a 12-hour clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day read from "H:MM AM/PM" text, normalised to the 24-hour clock.
///
/// Normalisation: 12 AM becomes hour 0, 12 PM stays hour 12, any other PM hour
/// gains 12. Minutes are taken verbatim. Neither field is range-checked, so
/// "13:00 PM" yields hour 25; callers compare on
/// [`minutes_since_midnight`](Self::minutes_since_midnight), which places such
/// values after every real time of day.
///
/// # Examples
///
/// ```
/// use codriver_trips::domain::TwelveHourTime;
///
/// let t = TwelveHourTime::parse("9:05 pm").unwrap();
/// assert_eq!(t.hour(), 21);
/// assert_eq!(t.minute(), 5);
/// assert_eq!(t.minutes_since_midnight(), 21 * 60 + 5);
///
/// assert_eq!(TwelveHourTime::parse("12:30 AM").unwrap().hour(), 0);
/// assert_eq!(TwelveHourTime::parse("12:30 PM").unwrap().hour(), 12);
///
/// assert!(TwelveHourTime::parse("14:30").is_err());
/// assert!(TwelveHourTime::parse("banana").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwelveHourTime {
    hour: u32,
    minute: u32,
}

impl TwelveHourTime {
    /// Parse "H:MM AM/PM". Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
            return Err(TimeError::new("expected AM/PM marker"));
        }

        let (body, marker) = s.split_at(s.len() - 2);
        let is_pm = if marker.eq_ignore_ascii_case("pm") {
            true
        } else if marker.eq_ignore_ascii_case("am") {
            false
        } else {
            return Err(TimeError::new("expected AM/PM marker"));
        };

        let (hour_text, minute_text) = body
            .trim_end()
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected H:MM before marker"))?;

        if hour_text.is_empty() || hour_text.len() > 2 || !is_digits(hour_text) {
            return Err(TimeError::new("hour must be one or two digits"));
        }
        if minute_text.len() != 2 || !is_digits(minute_text) {
            return Err(TimeError::new("minute must be two digits"));
        }

        let hour: u32 = hour_text
            .parse()
            .map_err(|_| TimeError::new("invalid hour digits"))?;
        let minute: u32 = minute_text
            .parse()
            .map_err(|_| TimeError::new("invalid minute digits"))?;

        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };

        Ok(Self { hour, minute })
    }

    /// Hour on the 24-hour clock (not range-checked).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute as written.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// The equivalent `NaiveTime`, if the fields form a real time of day.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl fmt::Display for TwelveHourTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Minutes since midnight of a `NaiveTime`, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Sort key for a trip's departure time.
///
/// Anything that is not a 12-hour clock time, including a missing time and
/// bare 24-hour text, counts as midnight (0).
pub fn departure_minutes(time: Option<&str>) -> u32 {
    time.and_then(|t| TwelveHourTime::parse(t).ok())
        .map(|t| t.minutes_since_midnight())
        .unwrap_or(0)
}

/// Hour read from 24-hour text: the leading digits of the text before the
/// first `:`. Text with no leading digits reads as hour 0; digits too large
/// for a `u32` saturate, so they stay out of every slot.
pub fn leading_hour(s: &str) -> u32 {
    let first = s.split(':').next().unwrap_or_default().trim_start();
    let digits_end = first
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(first.len());
    let digits = &first[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
