//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use cms_menu::Menu;
use cms_storage::{ContentLookup, MenuAdmin, MenuStore};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Read side: menu computation and path resolution.
    pub(crate) menu: Menu,
    /// Write side: menu entry CRUD.
    pub(crate) admin: Arc<dyn MenuAdmin>,
}

impl AppState {
    /// Build state over a single store backing every collaborator.
    pub(crate) fn new<S>(store: Arc<S>) -> Self
    where
        S: MenuStore + ContentLookup + MenuAdmin + 'static,
    {
        Self {
            menu: Menu::new(
                Arc::clone(&store) as Arc<dyn MenuStore>,
                Arc::clone(&store) as Arc<dyn ContentLookup>,
            ),
            admin: store,
        }
    }
}
