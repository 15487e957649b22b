//! Places wire formats and the values handed to the rest of the crate.

use serde::{Deserialize, Serialize};

use super::error::PlacesError;

/// One autocomplete prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub place_id: String,
    pub description: String,
}

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    /// Full formatted address
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Locality, when Google reports one
    pub city: Option<String>,
    /// First-level administrative area
    pub state: Option<String>,
}

impl PlaceDetails {
    /// The text to put back into a location field: the city if known,
    /// otherwise the full address.
    pub fn display_value(&self) -> &str {
        self.city.as_deref().unwrap_or(&self.address)
    }
}

/// Status values every Google web service response carries.
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Map a response status onto `Ok(true)` for results, `Ok(false)` for an
/// empty result set, or the matching error.
pub(super) fn check_status(status: &str, message: Option<&str>) -> Result<bool, PlacesError> {
    match status {
        STATUS_OK => Ok(true),
        STATUS_ZERO_RESULTS => Ok(false),
        "REQUEST_DENIED" => Err(PlacesError::Unauthorized),
        "OVER_QUERY_LIMIT" => Err(PlacesError::RateLimited),
        other => Err(PlacesError::Api {
            status: other.to_string(),
            message: message.unwrap_or_default().to_string(),
        }),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<PredictionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PredictionDto {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    pub result: Option<PlaceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceDto>,
}

/// The place shape shared by details and geocode results.
#[derive(Debug, Deserialize)]
pub(super) struct PlaceDto {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: GeometryDto,
    #[serde(default)]
    pub address_components: Vec<AddressComponentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    pub location: LatLngDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressComponentDto {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl From<PredictionDto> for Suggestion {
    fn from(dto: PredictionDto) -> Self {
        Self {
            place_id: dto.place_id,
            description: dto.description,
        }
    }
}

impl From<PlaceDto> for PlaceDetails {
    fn from(dto: PlaceDto) -> Self {
        let component = |kind: &str| {
            dto.address_components
                .iter()
                .find(|c| c.types.iter().any(|t| t == kind))
                .map(|c| c.long_name.clone())
        };

        Self {
            city: component("locality"),
            state: component("administrative_area_level_1"),
            address: dto.formatted_address.clone(),
            lat: dto.geometry.location.lat,
            lng: dto.geometry.location.lng,
        }
    }
}
