//! Askama templates for the web frontend.

use askama::Template;

use crate::board::TripListing;
use crate::domain::{RequestStatus, TimeSlot};
use crate::filter::{FilterConfig, SortMode};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Trip board page with the filter form and the initial list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub filter: FilterView,
    pub trips: Vec<TripView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip list fragment.
#[derive(Template)]
#[template(path = "trip_list.html")]
pub struct TripListTemplate {
    pub trips: Vec<TripView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Trip view model for templates.
#[derive(Debug, Clone)]
pub struct TripView {
    pub id: String,
    pub from_location: String,
    pub to_location: String,
    pub time: String,
    pub slot: Option<String>,
    pub owner_name: Option<String>,
    pub owner_image: Option<String>,
    pub request_label: Option<String>,
    /// CSS modifier for the request badge
    pub request_class: String,
}

impl TripView {
    pub fn from_listing(listing: &TripListing) -> Self {
        let trip = &listing.trip;
        let owner = trip.owner.as_ref();

        Self {
            id: trip.id.to_string(),
            from_location: trip.from_location.clone(),
            to_location: trip.to_location.clone(),
            time: trip.time().unwrap_or("Time not set").to_string(),
            slot: listing.time_slot.map(|s| s.label().to_string()),
            owner_name: owner.map(|o| o.name.clone()),
            owner_image: owner.and_then(|o| o.image.clone()),
            request_label: listing.request_status.map(|s| s.label().to_string()),
            request_class: match listing.request_status {
                Some(RequestStatus::Pending) => "pending",
                Some(RequestStatus::Accepted) => "accepted",
                Some(RequestStatus::Rejected) => "rejected",
                None => "",
            }
            .to_string(),
        }
    }
}

/// One choice in a select or checkbox group.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The filter form, prefilled from the current query.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub from: String,
    pub to: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub slots: Vec<OptionView>,
    pub sorts: Vec<OptionView>,
}

impl FilterView {
    pub fn from_config(config: &FilterConfig) -> Self {
        let slots = TimeSlot::ALL
            .iter()
            .map(|slot| OptionView {
                value: slot.as_str().to_string(),
                label: slot.label().to_string(),
                selected: config.time_slots.contains(slot),
            })
            .collect();

        let sorts = SortMode::ALL
            .iter()
            .map(|mode| OptionView {
                value: mode.as_str().to_string(),
                label: mode.label().to_string(),
                selected: *mode == config.sort_mode,
            })
            .collect();

        Self {
            from: config.from_text.clone(),
            to: config.to_text.clone(),
            date: config.target_date.format("%Y-%m-%d").to_string(),
            slots,
            sorts,
        }
    }
}
