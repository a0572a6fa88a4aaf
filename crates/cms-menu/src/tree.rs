//! Navigation tree built from resolved entries.
//!
//! Entries are stored in a flat `Vec` with parent/children relationships
//! tracked by indices, like the rest of the engine. [`MenuNode`] is the
//! nested form handed to renderers.
//!
//! Sibling order is input order. Upstream entries already arrive sorted by
//! `(parent_id, sort_order)`, so the builder never re-sorts.

use std::collections::HashMap;

use serde::Serialize;

use crate::entry::ResolvedMenuEntry;

/// Nested navigation node for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub entry: ResolvedMenuEntry,
    pub children: Vec<MenuNode>,
}

/// Arena-backed navigation tree.
pub struct MenuTree {
    entries: Vec<ResolvedMenuEntry>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl MenuTree {
    /// Build the tree. Entries whose parent is unknown become roots.
    #[must_use]
    pub fn build(entries: Vec<ResolvedMenuEntry>) -> Self {
        let by_id: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.entry.id.as_str(), i))
            .collect();

        let mut children = vec![Vec::new(); entries.len()];
        let mut roots = Vec::new();
        for (i, resolved) in entries.iter().enumerate() {
            match resolved
                .entry
                .parent_id
                .as_deref()
                .and_then(|id| by_id.get(id))
            {
                Some(&parent) => children[parent].push(i),
                None => roots.push(i),
            }
        }

        Self {
            entries,
            children,
            roots,
        }
    }

    /// Root-level entries in input order.
    #[must_use]
    pub fn roots(&self) -> Vec<&ResolvedMenuEntry> {
        self.roots.iter().map(|&i| &self.entries[i]).collect()
    }

    /// Direct children of an entry, empty for unknown ids.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&ResolvedMenuEntry> {
        self.entries
            .iter()
            .position(|e| e.entry.id == id)
            .map(|idx| self.children[idx].iter().map(|&c| &self.entries[c]).collect())
            .unwrap_or_default()
    }

    /// Number of entries in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into nested nodes.
    ///
    /// Entries unreachable from a root (only possible on a parent cycle)
    /// are dropped.
    #[must_use]
    pub fn into_nodes(self) -> Vec<MenuNode> {
        fn take(
            idx: usize,
            slots: &mut [Option<ResolvedMenuEntry>],
            children: &[Vec<usize>],
        ) -> Option<MenuNode> {
            let entry = slots[idx].take()?;
            let nested = children[idx]
                .iter()
                .filter_map(|&child| take(child, slots, children))
                .collect();
            Some(MenuNode {
                entry,
                children: nested,
            })
        }

        let mut slots: Vec<Option<ResolvedMenuEntry>> =
            self.entries.into_iter().map(Some).collect();
        self.roots
            .iter()
            .filter_map(|&root| take(root, &mut slots, &self.children))
            .collect()
    }
}
