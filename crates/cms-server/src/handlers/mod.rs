//! HTTP request handlers.

pub(crate) mod admin;
pub(crate) mod menu;
pub(crate) mod resolve;

use axum::Json;
use serde::Serialize;

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Serialize)]
pub(crate) struct ApiResponse<T> {
    success: bool,
    data: T,
}

/// Wrap data in the success envelope.
pub(crate) fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
    })
}
