// ABOUTME: Item CRUD API handlers: create, list, read, replace, and delete by id.
// ABOUTME: Store misses surface as ApiError::NotFound; mutations log their own diagnostic events.

use axum::Json;
use axum::extract::{Path, State};
use itemd_core::{Item, StoreError};

use crate::app_state::SharedState;
use crate::error::ApiError;

/// POST /items/ - Append a new item and echo it back.
pub async fn create_item(State(state): State<SharedState>, Json(item): Json<Item>) -> Json<Item> {
    tracing::info!(id = item.id, name = %item.name, "creating item");
    state.store.insert(item.clone()).await;
    Json(item)
}

/// GET /items/ - List every item in insertion order, as a bare array.
pub async fn list_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.store.list_all().await)
}

/// GET /items/{id} - Fetch the first item with the given id.
pub async fn read_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store.find_by_id(id).await?;
    Ok(Json(item))
}

/// PUT /items/{id} - Replace the first item with the given id.
pub async fn update_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, ApiError> {
    match state.store.replace_by_id(id, item).await {
        Ok(updated) => {
            tracing::info!(id, "item updated");
            Ok(Json(updated))
        }
        Err(e @ StoreError::NotFound(_)) => {
            tracing::warn!(id, "update failed: {}", e);
            Err(e.into())
        }
    }
}

/// DELETE /items/{id} - Remove the first item with the given id.
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_by_id(id).await {
        Ok(_) => {
            tracing::info!(id, "item deleted");
            Ok(Json(serde_json::json!({ "message": "Item deleted" })))
        }
        Err(e @ StoreError::NotFound(_)) => {
            tracing::warn!(id, "delete failed: {}", e);
            Err(e.into())
        }
    }
}
