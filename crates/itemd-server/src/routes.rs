// ABOUTME: Route definitions for the itemd HTTP API.
// ABOUTME: Assembles item routes into a single Axum Router wrapped by the observation layer.

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::app_state::SharedState;
use crate::observe::ObserveLayer;

/// Build the complete Axum router with all routes and shared state.
/// When `allow_cors` is set, any origin may call the API.
pub fn create_router(state: SharedState, allow_cors: bool) -> Router {
    let items = get(api::items::list_items).post(api::items::create_item);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/items", items.clone())
        .route("/items/", items)
        .route(
            "/items/{id}",
            get(api::items::read_item)
                .put(api::items::update_item)
                .delete(api::items::delete_item),
        )
        .with_state(state);

    if allow_cors {
        router = router.layer(cors_layer());
    }

    // Outermost, so preflights and rejections are observed too.
    router.layer(ObserveLayer::new())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
