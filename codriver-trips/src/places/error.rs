//! Places API error types.

/// Errors that can occur when interacting with the Places and Geocoding APIs.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The key was rejected (`REQUEST_DENIED`)
    #[error("request denied: check PLACES_API_KEY")]
    Unauthorized,

    /// Quota exhausted (`OVER_QUERY_LIMIT`)
    #[error("places quota exceeded")]
    RateLimited,

    /// API returned an error status, either over HTTP or in the body
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
