//! Symbolic date selection for the trip filter.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Error returned when a date selector cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date selector {0:?}: expected today, tomorrow or YYYY-MM-DD")]
pub struct InvalidDateSelector(String);

/// Which day the user is browsing.
///
/// # Examples
///
/// ```
/// use codriver_trips::domain::DateSelector;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
/// let tomorrow: DateSelector = "tomorrow".parse().unwrap();
/// assert_eq!(
///     tomorrow.resolve(today),
///     NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateSelector {
    #[default]
    Today,
    Tomorrow,
    Explicit(NaiveDate),
}

impl DateSelector {
    /// The calendar date this selector names, relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateSelector::Today => today,
            DateSelector::Tomorrow => today.succ_opt().unwrap_or(today),
            DateSelector::Explicit(date) => *date,
        }
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSelector::Today => f.write_str("today"),
            DateSelector::Tomorrow => f.write_str("tomorrow"),
            DateSelector::Explicit(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for DateSelector {
    type Err = InvalidDateSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("today") {
            return Ok(DateSelector::Today);
        }
        if trimmed.eq_ignore_ascii_case("tomorrow") {
            return Ok(DateSelector::Tomorrow);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(DateSelector::Explicit)
            .map_err(|_| InvalidDateSelector(s.to_string()))
    }
}
