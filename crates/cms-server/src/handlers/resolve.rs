//! Path resolution endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use cms_menu::Resolution;
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::{ApiResponse, ok};
use crate::state::AppState;

/// Query parameters for GET /resolve.
#[derive(Deserialize)]
pub(crate) struct ResolveQuery {
    /// Request path to resolve. Empty means the homepage.
    #[serde(default)]
    path: String,
}

/// Handle GET /resolve?path=.
///
/// An unmatched path is a successful response carrying `not_found`; only
/// store failures produce an error status.
pub(crate) async fn resolve(
    Query(query): Query<ResolveQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Resolution>>, ServerError> {
    let resolution = state.menu.resolve(&query.path)?;
    tracing::debug!(path = %query.path, result = resolution.kind(), "Resolved path");
    Ok(ok(resolution))
}
