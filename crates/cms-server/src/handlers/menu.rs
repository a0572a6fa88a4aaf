//! Public menu endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cms_menu::{Breadcrumb, MenuNode, ResolvedMenuEntry};
use cms_storage::MenuScope;

use crate::error::ServerError;
use crate::handlers::{ApiResponse, ok};
use crate::state::AppState;

/// Handle GET /menu.
pub(crate) async fn get_menu(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ResolvedMenuEntry>>>, ServerError> {
    Ok(ok(state.menu.entries(MenuScope::Visible)?))
}

/// Handle GET /menu/tree.
pub(crate) async fn get_menu_tree(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<MenuNode>>>, ServerError> {
    Ok(ok(state.menu.tree(MenuScope::Visible)?))
}

/// Handle GET /menu/items/{id}/breadcrumbs.
pub(crate) async fn get_breadcrumbs(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Breadcrumb>>>, ServerError> {
    let trail = state
        .menu
        .breadcrumbs(&id)?
        .ok_or(ServerError::EntryNotFound(id))?;
    Ok(ok(trail))
}
