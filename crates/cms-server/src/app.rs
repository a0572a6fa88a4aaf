//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `prefix` - Path prefix for all routes (empty for none)
pub(crate) fn create_router(state: Arc<AppState>, prefix: &str) -> Router {
    let api_routes = Router::new()
        .route("/menu", get(handlers::menu::get_menu))
        .route("/menu/tree", get(handlers::menu::get_menu_tree))
        .route(
            "/menu/items/{id}/breadcrumbs",
            get(handlers::menu::get_breadcrumbs),
        )
        .route("/resolve", get(handlers::resolve::resolve))
        .route("/admin/menu", get(handlers::admin::list_entries))
        .route("/admin/menu/items", post(handlers::admin::create_entry))
        .route(
            "/admin/menu/items/{id}",
            put(handlers::admin::update_entry).delete(handlers::admin::delete_entry),
        )
        .route("/admin/menu/reorder", put(handlers::admin::reorder));

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    let router = security::header_layers().fold(router, |router, layer| router.layer(layer));

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
