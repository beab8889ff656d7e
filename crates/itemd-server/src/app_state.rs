// ABOUTME: Shared application state for the itemd HTTP server.
// ABOUTME: Owns the item store so every router (and every test) gets its own isolated collection.

use std::sync::Arc;

use itemd_core::ItemStore;

/// Shared application state accessible by all Axum handlers.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: ItemStore,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh AppState for handing to the router.
    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }
}
