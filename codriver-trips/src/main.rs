use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use codriver_trips::api::{DataSource, MockTripSource, TripApiClient, TripApiConfig};
use codriver_trips::board::TripBoard;
use codriver_trips::config::{AppConfig, TripSourceConfig};
use codriver_trips::location::FixedLocation;
use codriver_trips::places::{PlacesClient, PlacesConfig};
use codriver_trips::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Create the trip source
    let source = match &config.trip_source {
        TripSourceConfig::Live {
            base_url,
            api_token,
        } => {
            let mut api_config = TripApiConfig::new(base_url);
            if let Some(token) = api_token {
                api_config = api_config.with_token(token);
            }
            info!(%base_url, "using live trip API");
            DataSource::Live(TripApiClient::new(api_config)?)
        }
        TripSourceConfig::Mock { data_dir } => {
            info!(data_dir = %data_dir.display(), "using mock trip data");
            DataSource::Mock(MockTripSource::new(data_dir)?)
        }
    };

    let places = match &config.places_api_key {
        Some(key) => Some(PlacesClient::new(PlacesConfig::new(key))?),
        None => {
            warn!("PLACES_API_KEY not set, autocomplete and location are disabled");
            None
        }
    };

    // The board starts empty; the refresh loop fills it on its first tick
    let board = Arc::new(TripBoard::new(source, &config.user_id).with_kind(config.trip_filter));
    Arc::clone(&board).spawn_refresh_loop(config.refresh_interval);

    let state = AppState::new(board, places, FixedLocation::new(config.home));
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "co-driver trip board listening");
    info!("GET  /api/trips          - Filtered trip list");
    info!("POST /api/trips/refresh  - Refresh now");
    info!("GET  /api/places/suggest - Location autocomplete");
    info!("GET  /api/location       - Current city");

    axum::serve(listener, app).await?;
    Ok(())
}
