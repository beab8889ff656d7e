// ABOUTME: Maps store failures onto HTTP responses for the itemd API.
// ABOUTME: NotFound always renders as 404 with the fixed {"detail": "Item not found"} body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemd_core::StoreError;

pub const NOT_FOUND_DETAIL: &str = "Item not found";

/// Errors a handler can surface to the caller.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "detail": NOT_FOUND_DETAIL })),
            )
                .into_response(),
        }
    }
}
