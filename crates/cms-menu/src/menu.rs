//! Read facade over the collaborators.

use std::collections::HashMap;
use std::sync::Arc;

use cms_storage::{ContentLookup, MenuScope, MenuStore};
use serde::Serialize;

use crate::entry::ResolvedMenuEntry;
use crate::error::MenuError;
use crate::path::compute_paths;
use crate::resolver::{PathResolver, Resolution};
use crate::target::resolve_target_slugs;
use crate::tree::{MenuNode, MenuTree};

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub path: String,
}

/// Menu engine bound to a menu store and a content lookup.
///
/// Every call reloads entries and recomputes targets and paths, so results
/// always reflect the current store contents.
pub struct Menu {
    store: Arc<dyn MenuStore>,
    lookup: Arc<dyn ContentLookup>,
}

impl Menu {
    /// Create a menu engine.
    #[must_use]
    pub fn new(store: Arc<dyn MenuStore>, lookup: Arc<dyn ContentLookup>) -> Self {
        Self { store, lookup }
    }

    /// Load entries and attach target slugs and paths.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] if a collaborator fails or the parent chain
    /// contains a cycle.
    pub fn entries(&self, scope: MenuScope) -> Result<Vec<ResolvedMenuEntry>, MenuError> {
        let entries = self.store.menu_entries(scope)?;
        let targets = resolve_target_slugs(self.lookup.as_ref(), &entries)?;
        tracing::debug!(
            entries = entries.len(),
            targets = targets.len(),
            "Resolved menu targets"
        );
        compute_paths(entries, &targets)
    }

    /// Nested navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] if the entries can't be computed.
    pub fn tree(&self, scope: MenuScope) -> Result<Vec<MenuNode>, MenuError> {
        Ok(MenuTree::build(self.entries(scope)?).into_nodes())
    }

    /// Resolve a request path against the visible menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] on collaborator failure or corrupt menu data.
    /// An unmatched path is [`Resolution::NotFound`], not an error.
    pub fn resolve(&self, path: &str) -> Result<Resolution, MenuError> {
        let entries = self.entries(MenuScope::Visible)?;
        PathResolver::new(&entries, self.lookup.as_ref()).resolve(path)
    }

    /// Breadcrumb trail from the root down to a visible entry.
    ///
    /// Returns `None` if no visible entry has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] if the entries can't be computed.
    pub fn breadcrumbs(&self, entry_id: &str) -> Result<Option<Vec<Breadcrumb>>, MenuError> {
        let entries = self.entries(MenuScope::Visible)?;
        let by_id: HashMap<&str, &ResolvedMenuEntry> =
            entries.iter().map(|e| (e.entry.id.as_str(), e)).collect();

        let Some(&start) = by_id.get(entry_id) else {
            return Ok(None);
        };

        // Chains are acyclic here: compute_paths rejected cycles
        let mut trail: Vec<Breadcrumb> = std::iter::successors(Some(start), |e| {
            e.entry
                .parent_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied())
        })
        .map(|e| Breadcrumb {
            title: e.entry.title.clone(),
            path: e.href(),
        })
        .collect();
        trail.reverse();

        Ok(Some(trail))
    }
}
