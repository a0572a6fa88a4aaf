//! Admin menu endpoints.
//!
//! Writes go through [`MenuAdmin`](cms_storage::MenuAdmin); listings return
//! every entry, hidden ones included, with derived fields attached.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cms_menu::ResolvedMenuEntry;
use cms_storage::{MenuEntry, MenuEntryPatch, MenuScope, NewMenuEntry, ReorderItem};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{ApiResponse, ok};
use crate::state::AppState;

/// Response data for DELETE /admin/menu/items/{id}.
#[derive(Serialize)]
pub(crate) struct Deleted {
    id: String,
}

/// Handle GET /admin/menu.
pub(crate) async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ResolvedMenuEntry>>>, ServerError> {
    Ok(ok(state.menu.entries(MenuScope::All)?))
}

/// Handle POST /admin/menu/items.
pub(crate) async fn create_entry(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewMenuEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MenuEntry>>), ServerError> {
    let Json(new) = body?;
    let entry = state.admin.create_entry(new)?;
    tracing::info!(id = %entry.id, kind = %entry.item_type, "Created menu entry");
    Ok((StatusCode::CREATED, ok(entry)))
}

/// Handle PUT /admin/menu/items/{id}.
pub(crate) async fn update_entry(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<MenuEntryPatch>, JsonRejection>,
) -> Result<Json<ApiResponse<MenuEntry>>, ServerError> {
    let Json(patch) = body?;
    let entry = state.admin.update_entry(&id, patch)?;
    tracing::info!(id = %entry.id, "Updated menu entry");
    Ok(ok(entry))
}

/// Handle DELETE /admin/menu/items/{id}.
pub(crate) async fn delete_entry(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Deleted>>, ServerError> {
    state.admin.delete_entry(&id)?;
    tracing::info!(id = %id, "Deleted menu entry");
    Ok(ok(Deleted { id }))
}

/// Handle PUT /admin/menu/reorder.
///
/// Applies the whole batch or nothing, then returns the updated listing.
pub(crate) async fn reorder(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<ReorderItem>>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<ResolvedMenuEntry>>>, ServerError> {
    let Json(items) = body?;
    state.admin.reorder(&items)?;
    tracing::info!(items = items.len(), "Reordered menu");
    Ok(ok(state.menu.entries(MenuScope::All)?))
}
