//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::api::ApiError;
use crate::location::{LocationOutcome, resolve_city};
use crate::notice::Trigger;
use crate::places::Debounced;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/trips", get(list_trips))
        .route("/api/trips/refresh", post(refresh_trips))
        .route("/api/places/suggest", get(suggest_places))
        .route("/api/places/details", get(place_details))
        .route("/api/location", get(detect_location))
        .route("/api/driver/status", get(driver_status))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Wall-clock time the board is filtered against.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Trip board page, prefilled from the query string.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Html<String>, AppError> {
    let now = now();
    let config = query.to_config(now.date())?;
    let listings = state.board.listings(now, &config).await;

    let template = IndexTemplate {
        filter: FilterView::from_config(&config),
        trips: listings.iter().map(TripView::from_listing).collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Filtered, sorted trips from the current board snapshot.
async fn list_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TripQuery>,
) -> Result<Response, AppError> {
    let now = now();
    let config = query.to_config(now.date())?;
    let listings = state.board.listings(now, &config).await;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = TripListTemplate {
            trips: listings.iter().map(TripView::from_listing).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(TripListResponse {
            date: config.target_date.format("%Y-%m-%d").to_string(),
            sort: config.sort_mode,
            trips: listings.iter().map(TripResult::from_listing).collect(),
        })
        .into_response())
    }
}

/// Refresh the board now, on the user's request.
async fn refresh_trips(State(state): State<AppState>) -> Json<RefreshResponse> {
    let notice = state.board.refresh_with(Trigger::User).await;
    let trips = state.board.snapshot().await.trips.len();
    Json(RefreshResponse { trips, notice })
}

/// Debounced autocomplete for one location field.
async fn suggest_places(
    State(state): State<AppState>,
    Query(req): Query<SuggestRequest>,
) -> Json<SuggestResponse> {
    let outcome = match &state.places {
        Some(places) => places.debouncer(req.field).submit(&req.q).await,
        None => Debounced::Ready(Vec::new()),
    };

    Json(match outcome {
        Debounced::Superseded => SuggestResponse {
            suggestions: Vec::new(),
            superseded: true,
        },
        Debounced::Ready(suggestions) => SuggestResponse {
            suggestions,
            superseded: false,
        },
    })
}

/// Details of a chosen suggestion, or `null`.
async fn place_details(
    State(state): State<AppState>,
    Query(req): Query<PlaceDetailsRequest>,
) -> Json<Option<PlaceResult>> {
    let Some(places) = &state.places else {
        return Json(None);
    };

    match places.client.details(&req.place_id).await {
        Ok(place) => Json(place.map(PlaceResult::from)),
        Err(e) => {
            warn!(place_id = %req.place_id, error = %e, "place details lookup failed");
            Json(None)
        }
    }
}

/// The city at the configured position.
async fn detect_location(
    State(state): State<AppState>,
    Query(req): Query<LocationRequest>,
) -> Json<LocationOutcome> {
    let outcome = match &state.places {
        Some(places) => resolve_city(&state.location, &places.client, req.trigger).await,
        None => LocationOutcome {
            city: None,
            notice: req
                .trigger
                .surface("Detect location", &"no places API key configured"),
        },
    };
    Json(outcome)
}

/// The user's co-driver registration.
async fn driver_status(
    State(state): State<AppState>,
) -> Result<Json<DriverStatusResponse>, AppError> {
    let status = state.board.driver_status().await?;
    Ok(Json(status.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
