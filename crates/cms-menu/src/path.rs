//! Canonical path computation.
//!
//! An entry's path is the list of non-empty slugs on its parent chain, root
//! first. Page entries that target the homepage contribute no segment (the
//! homepage lives at `/`), but the walk continues through them, so items
//! nested under a homepage container still inherit the container's own
//! ancestors.
//!
//! # Preconditions
//!
//! Input entries are expected in [`MenuStore`](cms_storage::MenuStore)
//! order, `(parent_id, sort_order, id)`. The output keeps that order.

use std::collections::{HashMap, HashSet};

use cms_storage::{MenuEntry, MenuItemType};

use crate::entry::ResolvedMenuEntry;
use crate::error::MenuError;
use crate::target::TargetSlugs;

/// Arena view over a flat entry slice with O(1) parent lookups.
pub struct MenuIndex<'a> {
    entries: &'a [MenuEntry],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> MenuIndex<'a> {
    /// Index entries by id.
    #[must_use]
    pub fn new(entries: &'a [MenuEntry]) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();
        Self { entries, by_id }
    }

    /// Position of an entry by id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Position of the parent entry. `None` for roots and for entries whose
    /// parent is missing (treated as roots).
    #[must_use]
    pub fn parent_of(&self, idx: usize) -> Option<usize> {
        self.entries[idx]
            .parent_id
            .as_deref()
            .and_then(|id| self.position(id))
    }

    /// Entry at a position.
    #[must_use]
    pub fn entry(&self, idx: usize) -> &'a MenuEntry {
        &self.entries[idx]
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the path segments of the entry at `idx`.
///
/// Walks the parent chain iteratively. Every visited entry is recorded, so
/// a corrupt parent chain fails with [`MenuError::Cycle`] instead of
/// looping forever.
///
/// # Errors
///
/// Returns [`MenuError::Cycle`] if the parent chain revisits an entry.
pub fn build_path(
    index: &MenuIndex<'_>,
    idx: usize,
    targets: &TargetSlugs,
) -> Result<Vec<String>, MenuError> {
    let mut segments = Vec::new();
    // Only the chain being walked, so cost is bounded by depth
    let mut visited = HashSet::new();
    let mut current = Some(idx);

    while let Some(i) = current {
        if !visited.insert(i) {
            let entry_id = index.entry(idx).id.clone();
            tracing::warn!(entry = %entry_id, "Menu parent cycle detected");
            return Err(MenuError::Cycle { entry_id });
        }

        let entry = index.entry(i);
        let is_homepage = entry.item_type == MenuItemType::Page && targets.is_homepage(&entry.id);
        if !is_homepage && !entry.slug.is_empty() {
            segments.push(entry.slug.clone());
        }
        current = index.parent_of(i);
    }

    segments.reverse();
    Ok(segments)
}

/// Attach target slugs and computed paths to every entry.
///
/// # Errors
///
/// Returns [`MenuError::Cycle`] if any entry's parent chain loops.
pub fn compute_paths(
    entries: Vec<MenuEntry>,
    targets: &TargetSlugs,
) -> Result<Vec<ResolvedMenuEntry>, MenuError> {
    let paths = {
        let index = MenuIndex::new(&entries);
        (0..entries.len())
            .map(|i| build_path(&index, i, targets))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(entries
        .into_iter()
        .zip(paths)
        .map(|(entry, path_segments)| {
            let target = targets.get(&entry.id);
            ResolvedMenuEntry {
                target_slug: target.map(|t| t.slug.clone()),
                target_resolved: target.is_some_and(|t| t.resolved),
                path_segments,
                entry,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use cms_storage::{ContentStatus, MemoryStore, PageRecord};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::target::resolve_target_slugs;

    fn entry(id: &str, item_type: MenuItemType, slug: &str, parent_id: Option<&str>) -> MenuEntry {
        MenuEntry {
            id: id.to_owned(),
            title: id.to_owned(),
            item_type,
            url: None,
            target_id: None,
            parent_id: parent_id.map(str::to_owned),
            sort_order: 0,
            is_visible: true,
            open_new_window: false,
            slug: slug.to_owned(),
        }
    }

    fn page_entry(id: &str, target: &str, slug: &str, parent_id: Option<&str>) -> MenuEntry {
        let mut e = entry(id, MenuItemType::Page, slug, parent_id);
        e.target_id = Some(target.to_owned());
        e
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_page(PageRecord {
                id: "p-home".to_owned(),
                slug: "home".to_owned(),
                title: "Home".to_owned(),
                status: ContentStatus::Published,
                is_homepage: true,
            })
            .with_page(PageRecord {
                id: "p-about".to_owned(),
                slug: "about".to_owned(),
                title: "About".to_owned(),
                status: ContentStatus::Published,
                is_homepage: false,
            })
    }

    fn paths(entries: Vec<MenuEntry>) -> Vec<(String, Vec<String>)> {
        let targets = resolve_target_slugs(&store(), &entries).unwrap();
        compute_paths(entries, &targets)
            .unwrap()
            .into_iter()
            .map(|e| (e.entry.id, e.path_segments))
            .collect()
    }

    fn segs(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_root_entry_path_is_own_slug() {
        let result = paths(vec![entry("m1", MenuItemType::BlogIndex, "blog", None)]);

        assert_eq!(result, vec![("m1".to_owned(), segs(&["blog"]))]);
    }

    #[test]
    fn test_nested_entry_path_is_root_first() {
        let result = paths(vec![
            entry("a", MenuItemType::BlogIndex, "blog", None),
            entry("b", MenuItemType::BlogIndex, "tech", Some("a")),
            entry("c", MenuItemType::BlogIndex, "rust", Some("b")),
        ]);

        assert_eq!(result[2].1, segs(&["blog", "tech", "rust"]));
    }

    #[test]
    fn test_empty_slug_contributes_nothing() {
        let result = paths(vec![
            entry("a", MenuItemType::BlogIndex, "", None),
            entry("b", MenuItemType::BlogIndex, "tech", Some("a")),
        ]);

        assert_eq!(result[0].1, Vec::<String>::new());
        assert_eq!(result[1].1, segs(&["tech"]));
    }

    #[test]
    fn test_missing_parent_treated_as_root() {
        let result = paths(vec![entry("b", MenuItemType::BlogIndex, "tech", Some("gone"))]);

        assert_eq!(result[0].1, segs(&["tech"]));
    }

    #[test]
    fn test_homepage_entry_elides_own_segment() {
        let result = paths(vec![page_entry("h", "p-home", "home", None)]);

        assert_eq!(result[0].1, Vec::<String>::new());
    }

    #[test]
    fn test_child_of_homepage_keeps_homepage_ancestors() {
        let result = paths(vec![
            entry("section", MenuItemType::BlogIndex, "site", None),
            page_entry("h", "p-home", "home", Some("section")),
            page_entry("about", "p-about", "about", Some("h")),
        ]);

        assert_eq!(result[1].1, segs(&["site"]));
        assert_eq!(result[2].1, segs(&["site", "about"]));
    }

    #[test]
    fn test_consecutive_homepage_ancestors_are_both_elided() {
        let result = paths(vec![
            entry("root", MenuItemType::BlogIndex, "top", None),
            page_entry("h1", "p-home", "home-a", Some("root")),
            page_entry("h2", "p-home", "home-b", Some("h1")),
            entry("leaf", MenuItemType::BlogIndex, "leaf", Some("h2")),
        ]);

        assert_eq!(result[3].1, segs(&["top", "leaf"]));
    }

    #[test]
    fn test_non_page_entry_with_homepage_slug_is_kept() {
        // Only PAGE entries targeting the homepage are elided
        let mut category = entry("c", MenuItemType::Category, "home", None);
        category.target_id = Some("p-home".to_owned());

        let result = paths(vec![category]);

        assert_eq!(result[0].1, segs(&["home"]));
    }

    #[test]
    fn test_path_length_equals_depth_without_homepage_ancestor() {
        let entries = vec![
            entry("a", MenuItemType::BlogIndex, "a", None),
            entry("b", MenuItemType::Category, "b", Some("a")),
            page_entry("c", "p-about", "c", Some("b")),
        ];

        let result = paths(entries);

        for ((_, segments), depth) in result.iter().zip([1, 2, 3]) {
            assert_eq!(segments.len(), depth);
        }
    }

    #[test]
    fn test_path_length_below_depth_with_homepage_ancestor() {
        let entries = vec![
            entry("a", MenuItemType::BlogIndex, "a", None),
            page_entry("h", "p-home", "h", Some("a")),
            entry("b", MenuItemType::BlogIndex, "b", Some("h")),
            entry("c", MenuItemType::BlogIndex, "c", Some("b")),
        ];

        let result = paths(entries);

        let lengths: Vec<usize> = result.iter().map(|(_, s)| s.len()).collect();
        assert_eq!(lengths, vec![1, 1, 2, 3]);
        for ((_, segments), depth) in result.iter().zip([1, 2, 3, 4]).skip(1) {
            assert!(segments.len() < depth);
        }
    }

    #[test]
    fn test_deep_chain_path() {
        let mut entries = vec![entry("e0", MenuItemType::BlogIndex, "s0", None)];
        for i in 1..200 {
            let parent = format!("e{}", i - 1);
            entries.push(entry(
                &format!("e{i}"),
                MenuItemType::BlogIndex,
                &format!("s{i}"),
                Some(&parent),
            ));
        }

        let result = paths(entries);

        assert_eq!(result[199].1.len(), 200);
        assert_eq!(result[199].1[0], "s0");
    }

    #[test]
    fn test_cycle_is_error() {
        let entries = vec![
            entry("a", MenuItemType::BlogIndex, "a", Some("b")),
            entry("b", MenuItemType::BlogIndex, "b", Some("a")),
        ];
        let targets = TargetSlugs::default();

        let err = compute_paths(entries, &targets).unwrap_err();

        assert!(matches!(err, MenuError::Cycle { entry_id } if entry_id == "a"));
    }

    #[test]
    fn test_self_parent_is_cycle() {
        let entries = vec![entry("a", MenuItemType::BlogIndex, "a", Some("a"))];
        let targets = TargetSlugs::default();

        let err = compute_paths(entries, &targets).unwrap_err();

        assert!(matches!(err, MenuError::Cycle { .. }));
    }

    #[test]
    fn test_dangling_target_marked_unresolved() {
        let entries = vec![page_entry("m", "p-gone", "gone", None)];
        let targets = resolve_target_slugs(&store(), &entries).unwrap();

        let resolved = compute_paths(entries, &targets).unwrap();

        assert_eq!(resolved[0].target_slug.as_deref(), Some("p-gone"));
        assert!(!resolved[0].target_resolved);
        assert_eq!(resolved[0].path_segments, segs(&["gone"]));
    }

    #[test]
    fn test_index_parent_of() {
        let entries = vec![
            entry("a", MenuItemType::BlogIndex, "a", None),
            entry("b", MenuItemType::BlogIndex, "b", Some("a")),
        ];
        let index = MenuIndex::new(&entries);

        assert_eq!(index.parent_of(0), None);
        assert_eq!(index.parent_of(1), Some(0));
        assert_eq!(index.position("b"), Some(1));
        assert_eq!(index.len(), 2);
    }
}
