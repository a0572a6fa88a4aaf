//! Error types for the HTTP server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cms_menu::MenuError;
use cms_storage::{StorageError, StorageErrorKind};
use serde_json::json;

/// Server error type.
///
/// Rendered as `{"success": false, "error": "..."}` with a status derived
/// from the underlying failure.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Menu computation or resolution failed.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Store rejected or failed an admin operation.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Requested menu entry does not exist.
    #[error("Menu entry not found: {0}")]
    EntryNotFound(String),

    /// Request body could not be parsed.
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
}

/// Status code for a storage failure.
fn storage_status(err: &StorageError) -> StatusCode {
    match err.kind {
        StorageErrorKind::NotFound => StatusCode::NOT_FOUND,
        StorageErrorKind::Invalid => StatusCode::BAD_REQUEST,
        StorageErrorKind::Conflict => StatusCode::CONFLICT,
        StorageErrorKind::Unavailable | StorageErrorKind::Timeout => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ServerError {
    /// HTTP status for this error.
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::Menu(MenuError::Lookup(e)) | Self::Storage(e) => storage_status(e),
            Self::Menu(MenuError::Cycle { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EntryNotFound(_) => StatusCode::NOT_FOUND,
            Self::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = json!({"success": false, "error": self.to_string()});
        (status, axum::Json(body)).into_response()
    }
}
