//! Web layer for the co-driver trip board.
//!
//! Serves the trip board page, a JSON and HTML-fragment trip API, and thin
//! proxies for place autocomplete and location lookup.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, Places};
pub use templates::*;
