//! Filter configuration for the trip board.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DateSelector, TimeSlot};

/// Error returned when parsing an unknown sort mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0}")]
pub struct InvalidSortMode(String);

/// How to order the filtered trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Keep the order the trip source returned.
    #[default]
    Relevance,
    /// Earliest departure time first.
    EarliestDeparture,
    /// Latest departure time first.
    LatestDeparture,
}

impl SortMode {
    /// Every sort mode, in the order the sort control lists them.
    pub const ALL: [SortMode; 3] = [
        SortMode::Relevance,
        SortMode::EarliestDeparture,
        SortMode::LatestDeparture,
    ];

    /// Short identifier, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::EarliestDeparture => "earliest",
            SortMode::LatestDeparture => "latest",
        }
    }

    /// Human-readable label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::EarliestDeparture => "Earliest departure",
            SortMode::LatestDeparture => "Latest departure",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = InvalidSortMode;

    /// Accepts the short identifiers and the long camelCase or snake_case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "earliest" | "earliestdeparture" => Ok(SortMode::EarliestDeparture),
            "latest" | "latestdeparture" => Ok(SortMode::LatestDeparture),
            _ => Err(InvalidSortMode(s.to_string())),
        }
    }
}

/// Everything the user has chosen on the trip board.
///
/// Rebuilt whenever the location inputs change or the filter sheet is
/// committed. Location texts match case-insensitively as substrings, and an
/// empty text matches every trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub from_text: String,
    pub to_text: String,
    pub target_date: NaiveDate,
    /// Empty means no time filtering.
    pub time_slots: BTreeSet<TimeSlot>,
    pub sort_mode: SortMode,
}

impl FilterConfig {
    /// Match every trip on `target_date`, in source order.
    pub fn new(target_date: NaiveDate) -> Self {
        Self {
            from_text: String::new(),
            to_text: String::new(),
            target_date,
            time_slots: BTreeSet::new(),
            sort_mode: SortMode::default(),
        }
    }

    /// Match every trip on the day `selector` names relative to `today`.
    pub fn for_selector(selector: DateSelector, today: NaiveDate) -> Self {
        Self::new(selector.resolve(today))
    }

    /// Set the origin text.
    pub fn with_from(mut self, text: impl Into<String>) -> Self {
        self.from_text = text.into();
        self
    }

    /// Set the destination text.
    pub fn with_to(mut self, text: impl Into<String>) -> Self {
        self.to_text = text.into();
        self
    }

    /// Replace the selected time slots.
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.time_slots = slots.into_iter().collect();
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }
}
