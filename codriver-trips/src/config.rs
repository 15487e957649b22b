//! Process configuration, read from the environment once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::TripFilterKind;
use crate::board::DEFAULT_REFRESH_INTERVAL;
use crate::location::Coordinates;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors in the process environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} is not valid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where trips come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripSourceConfig {
    /// The live trip API
    Live {
        base_url: String,
        api_token: Option<String>,
    },
    /// JSON files in a directory
    Mock { data_dir: PathBuf },
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub trip_source: TripSourceConfig,
    /// The signed-in co-driver
    pub user_id: String,
    /// Which trips the board asks the source for
    pub trip_filter: TripFilterKind,
    /// Google Maps key. Autocomplete and location are off without one.
    pub places_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub refresh_interval: Duration,
    /// Position reported by the fixed location provider
    pub home: Option<Coordinates>,
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    ///
    /// `MOCK_DATA_DIR`, when set, takes precedence over `TRIPS_API_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let trip_source = match get("MOCK_DATA_DIR") {
            Some(dir) => TripSourceConfig::Mock {
                data_dir: PathBuf::from(dir),
            },
            None => TripSourceConfig::Live {
                base_url: get("TRIPS_API_URL").ok_or(ConfigError::Missing {
                    name: "TRIPS_API_URL",
                })?,
                api_token: get("TRIPS_API_TOKEN"),
            },
        };

        let user_id = get("CODRIVER_USER_ID").ok_or(ConfigError::Missing {
            name: "CODRIVER_USER_ID",
        })?;

        let trip_filter = match get("TRIPS_FILTER") {
            Some(value) => parse("TRIPS_FILTER", value)?,
            None => TripFilterKind::default(),
        };

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR)?;

        let refresh_interval = match get("REFRESH_INTERVAL_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "REFRESH_INTERVAL_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_REFRESH_INTERVAL,
        };

        let home = match (get("HOME_LAT"), get("HOME_LNG")) {
            (Some(lat), Some(lng)) => Some(Coordinates {
                lat: parse("HOME_LAT", lat)?,
                lng: parse("HOME_LNG", lng)?,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing { name: "HOME_LNG" }),
            (None, Some(_)) => return Err(ConfigError::Missing { name: "HOME_LAT" }),
        };

        Ok(Self {
            trip_source,
            user_id,
            trip_filter,
            places_api_key: get("PLACES_API_KEY"),
            bind_addr,
            refresh_interval,
            home,
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    parse(name, value.unwrap_or_else(|| default.to_string()))
}
