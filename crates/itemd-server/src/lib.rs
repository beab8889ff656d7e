// ABOUTME: HTTP server for itemd, exposing CRUD endpoints over the in-memory item store.
// ABOUTME: Uses Axum with shared state and a tower layer that logs one observation per request.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod logging;
pub mod observe;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, ItemdConfig};
pub use observe::ObserveLayer;
pub use routes::create_router;
