//! In-memory storage backend.
//!
//! [`MemoryStore`] keeps every table behind its own `RwLock`. All menu
//! writes take the single menu write lock, so a bulk reorder is observed by
//! readers either entirely or not at all.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::record::{
    CategoryRecord, ContentStatus, MenuEntry, MenuEntryPatch, MenuItemType, NewMenuEntry,
    PageRecord, PageRef, PostRecord, ReorderItem, SlugRef,
};
use crate::seed::Seed;
use crate::storage::{
    ContentLookup, MenuAdmin, MenuScope, MenuStore, StorageError, StorageErrorKind, find_cycle,
    sort_menu_entries,
};

/// Backend identifier for error messages.
const BACKEND: &str = "Memory";

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StorageError> {
    lock.read()
        .map_err(|_| StorageError::unavailable("lock poisoned").with_backend(BACKEND))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StorageError> {
    lock.write()
        .map_err(|_| StorageError::unavailable("lock poisoned").with_backend(BACKEND))
}

fn entry_entity(id: &str) -> String {
    format!("menu entry {id}")
}

/// Reject types this build cannot round-trip. Unknown tags load from seeds
/// as [`MenuItemType::Other`] but are never written by the admin API.
fn require_known_type(item_type: MenuItemType) -> Result<(), StorageError> {
    if item_type == MenuItemType::Other {
        return Err(StorageError::invalid(
            "type must be one of PAGE, POST, CATEGORY, EXTERNAL_LINK, BLOG_INDEX",
        )
        .with_backend(BACKEND));
    }
    Ok(())
}

/// Check the url/target_id requirements of an entry type.
fn validate_link(
    item_type: MenuItemType,
    url: Option<&str>,
    target_id: Option<&str>,
) -> Result<(), StorageError> {
    if item_type == MenuItemType::ExternalLink && url.is_none_or(str::is_empty) {
        return Err(StorageError::invalid("url is required for EXTERNAL_LINK entries")
            .with_backend(BACKEND));
    }
    if item_type.targets_content() && target_id.is_none_or(str::is_empty) {
        return Err(StorageError::invalid(format!(
            "targetId is required for {item_type} entries"
        ))
        .with_backend(BACKEND));
    }
    Ok(())
}

/// In-memory content and menu store.
///
/// Used by the server for seed-file backed sites and by tests. Builder
/// methods configure it with data; the collaborator traits read and write it.
///
/// # Example
///
/// ```ignore
/// use cms_storage::{ContentStatus, MemoryStore, PageRecord};
///
/// let store = MemoryStore::new().with_page(PageRecord {
///     id: "p1".to_owned(),
///     slug: "about".to_owned(),
///     title: "About".to_owned(),
///     status: ContentStatus::Published,
///     is_homepage: false,
/// });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: RwLock<Vec<PageRecord>>,
    categories: RwLock<Vec<CategoryRecord>>,
    posts: RwLock<Vec<PostRecord>>,
    menu: RwLock<Vec<MenuEntry>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the contents of a seed document.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            pages: RwLock::new(seed.pages),
            categories: RwLock::new(seed.categories),
            posts: RwLock::new(seed.posts),
            menu: RwLock::new(seed.menu),
        }
    }

    /// Add a page.
    #[must_use]
    pub fn with_page(mut self, page: PageRecord) -> Self {
        self.pages
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page);
        self
    }

    /// Add a category.
    #[must_use]
    pub fn with_category(mut self, category: CategoryRecord) -> Self {
        self.categories
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(category);
        self
    }

    /// Add a post.
    #[must_use]
    pub fn with_post(mut self, post: PostRecord) -> Self {
        self.posts
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(post);
        self
    }

    /// Add a menu entry as-is, without validation.
    #[must_use]
    pub fn with_menu_entry(mut self, entry: MenuEntry) -> Self {
        self.menu
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
        self
    }
}

impl ContentLookup for MemoryStore {
    fn pages_by_ids(&self, ids: &[String]) -> Result<Vec<PageRef>, StorageError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(read(&self.pages)?
            .iter()
            .filter(|page| wanted.contains(page.id.as_str()))
            .map(PageRef::from)
            .collect())
    }

    fn categories_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(read(&self.categories)?
            .iter()
            .filter(|category| wanted.contains(category.id.as_str()))
            .map(SlugRef::from)
            .collect())
    }

    fn posts_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(read(&self.posts)?
            .iter()
            .filter(|post| wanted.contains(post.id.as_str()))
            .map(SlugRef::from)
            .collect())
    }

    fn page_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PageRecord>, StorageError> {
        Ok(read(&self.pages)?
            .iter()
            .find(|page| page.slug == slug && status.is_none_or(|s| page.status == s))
            .cloned())
    }

    fn homepage(&self, status: ContentStatus) -> Result<Option<PageRecord>, StorageError> {
        Ok(read(&self.pages)?
            .iter()
            .find(|page| page.is_homepage && page.status == status)
            .cloned())
    }

    fn category_by_slug(&self, slug: &str) -> Result<Option<CategoryRecord>, StorageError> {
        Ok(read(&self.categories)?
            .iter()
            .find(|category| category.slug == slug)
            .cloned())
    }

    fn post_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PostRecord>, StorageError> {
        Ok(read(&self.posts)?
            .iter()
            .find(|post| post.slug == slug && status.is_none_or(|s| post.status == s))
            .cloned())
    }
}

impl MenuStore for MemoryStore {
    fn menu_entries(&self, scope: MenuScope) -> Result<Vec<MenuEntry>, StorageError> {
        let mut entries: Vec<MenuEntry> = read(&self.menu)?
            .iter()
            .filter(|entry| scope == MenuScope::All || entry.is_visible)
            .cloned()
            .collect();
        sort_menu_entries(&mut entries);
        Ok(entries)
    }
}

impl MenuAdmin for MemoryStore {
    fn create_entry(&self, new: NewMenuEntry) -> Result<MenuEntry, StorageError> {
        require_known_type(new.item_type)?;
        validate_link(new.item_type, new.url.as_deref(), new.target_id.as_deref())?;

        let mut menu = write(&self.menu)?;
        if let Some(parent_id) = &new.parent_id
            && !menu.iter().any(|e| &e.id == parent_id)
        {
            return Err(StorageError::not_found(entry_entity(parent_id)).with_backend(BACKEND));
        }

        let entry = MenuEntry {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            item_type: new.item_type,
            url: new.url,
            target_id: new.target_id,
            parent_id: new.parent_id,
            sort_order: new.sort_order,
            is_visible: new.is_visible,
            open_new_window: new.open_new_window,
            slug: new.slug,
        };
        menu.push(entry.clone());
        tracing::debug!(id = %entry.id, "Created menu entry");
        Ok(entry)
    }

    fn update_entry(&self, id: &str, patch: MenuEntryPatch) -> Result<MenuEntry, StorageError> {
        if let Some(item_type) = patch.item_type {
            require_known_type(item_type)?;
        }
        let mut menu = write(&self.menu)?;
        let idx = menu
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StorageError::not_found(entry_entity(id)).with_backend(BACKEND))?;

        let mut updated = menu[idx].clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(item_type) = patch.item_type {
            updated.item_type = item_type;
        }
        if let Some(url) = patch.url {
            updated.url = url;
        }
        if let Some(target_id) = patch.target_id {
            updated.target_id = target_id;
        }
        if let Some(parent_id) = patch.parent_id {
            updated.parent_id = parent_id;
        }
        if let Some(sort_order) = patch.sort_order {
            updated.sort_order = sort_order;
        }
        if let Some(is_visible) = patch.is_visible {
            updated.is_visible = is_visible;
        }
        if let Some(open_new_window) = patch.open_new_window {
            updated.open_new_window = open_new_window;
        }
        if let Some(slug) = patch.slug {
            updated.slug = slug;
        }

        validate_link(
            updated.item_type,
            updated.url.as_deref(),
            updated.target_id.as_deref(),
        )?;

        if let Some(parent_id) = &updated.parent_id {
            if !menu.iter().any(|e| &e.id == parent_id) {
                return Err(
                    StorageError::not_found(entry_entity(parent_id)).with_backend(BACKEND)
                );
            }
            let mut parents: HashMap<&str, Option<&str>> = menu
                .iter()
                .map(|e| (e.id.as_str(), e.parent_id.as_deref()))
                .collect();
            parents.insert(updated.id.as_str(), Some(parent_id.as_str()));
            if find_cycle(&parents).is_some() {
                return Err(StorageError::new(StorageErrorKind::Conflict)
                    .with_message("parent would create a cycle")
                    .with_entity(entry_entity(id))
                    .with_backend(BACKEND));
            }
        }

        menu[idx] = updated.clone();
        tracing::debug!(id, "Updated menu entry");
        Ok(updated)
    }

    fn delete_entry(&self, id: &str) -> Result<(), StorageError> {
        let mut menu = write(&self.menu)?;
        let idx = menu
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StorageError::not_found(entry_entity(id)).with_backend(BACKEND))?;
        menu.remove(idx);

        for child in menu.iter_mut() {
            if child.parent_id.as_deref() == Some(id) {
                child.parent_id = None;
            }
        }
        tracing::debug!(id, "Deleted menu entry");
        Ok(())
    }

    fn reorder(&self, items: &[ReorderItem]) -> Result<(), StorageError> {
        let mut menu = write(&self.menu)?;

        let index: HashMap<&str, usize> = menu
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();

        // Validate the whole batch before touching anything
        let mut seen = HashSet::new();
        let mut parents: HashMap<&str, Option<&str>> = menu
            .iter()
            .map(|e| (e.id.as_str(), e.parent_id.as_deref()))
            .collect();
        for item in items {
            if !index.contains_key(item.id.as_str()) {
                return Err(StorageError::not_found(entry_entity(&item.id)).with_backend(BACKEND));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(StorageError::invalid(format!(
                    "menu entry {} listed more than once",
                    item.id
                ))
                .with_backend(BACKEND));
            }
            if let Some(parent) = &item.parent_id {
                if let Some(parent_id) = parent
                    && !index.contains_key(parent_id.as_str())
                {
                    return Err(
                        StorageError::not_found(entry_entity(parent_id)).with_backend(BACKEND)
                    );
                }
                parents.insert(item.id.as_str(), parent.as_deref());
            }
        }
        if let Some(id) = find_cycle(&parents) {
            return Err(StorageError::new(StorageErrorKind::Conflict)
                .with_message("reorder would create a parent cycle")
                .with_entity(entry_entity(id))
                .with_backend(BACKEND));
        }

        let updates: Vec<(usize, i32, Option<Option<String>>)> = items
            .iter()
            .map(|item| (index[item.id.as_str()], item.sort_order, item.parent_id.clone()))
            .collect();
        for (idx, sort_order, parent_id) in updates {
            menu[idx].sort_order = sort_order;
            if let Some(parent_id) = parent_id {
                menu[idx].parent_id = parent_id;
            }
        }

        tracing::debug!(count = items.len(), "Reordered menu entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(id: &str, slug: &str, status: ContentStatus, is_homepage: bool) -> PageRecord {
        PageRecord {
            id: id.to_owned(),
            slug: slug.to_owned(),
            title: slug.to_owned(),
            status,
            is_homepage,
        }
    }

    fn entry(id: &str, parent_id: Option<&str>, sort_order: i32) -> MenuEntry {
        MenuEntry {
            id: id.to_owned(),
            title: id.to_owned(),
            item_type: MenuItemType::BlogIndex,
            url: None,
            target_id: None,
            parent_id: parent_id.map(str::to_owned),
            sort_order,
            is_visible: true,
            open_new_window: false,
            slug: id.to_owned(),
        }
    }

    fn new_entry(item_type: MenuItemType) -> NewMenuEntry {
        NewMenuEntry {
            title: "Item".to_owned(),
            item_type,
            url: None,
            target_id: None,
            parent_id: None,
            sort_order: 0,
            is_visible: true,
            open_new_window: false,
            slug: "item".to_owned(),
        }
    }

    fn menu_ids(store: &MemoryStore) -> Vec<String> {
        store
            .menu_entries(MenuScope::All)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect()
    }

    // ContentLookup tests

    #[test]
    fn test_pages_by_ids_returns_only_existing() {
        let store = MemoryStore::new()
            .with_page(page("p1", "about", ContentStatus::Published, false))
            .with_page(page("p2", "home", ContentStatus::Published, true));

        let refs = store
            .pages_by_ids(&["p2".to_owned(), "missing".to_owned()])
            .unwrap();

        assert_eq!(
            refs,
            vec![PageRef {
                id: "p2".to_owned(),
                slug: "home".to_owned(),
                is_homepage: true,
            }]
        );
    }

    #[test]
    fn test_page_by_slug_respects_status_filter() {
        let store =
            MemoryStore::new().with_page(page("p1", "draft", ContentStatus::Draft, false));

        assert!(store.page_by_slug("draft", None).unwrap().is_some());
        assert!(
            store
                .page_by_slug("draft", Some(ContentStatus::Published))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_homepage_requires_status() {
        let store = MemoryStore::new().with_page(page("p1", "home", ContentStatus::Draft, true));

        assert!(store.homepage(ContentStatus::Published).unwrap().is_none());
        assert!(store.homepage(ContentStatus::Draft).unwrap().is_some());
    }

    #[test]
    fn test_post_by_slug_respects_status_filter() {
        let store = MemoryStore::new().with_post(PostRecord {
            id: "t1".to_owned(),
            slug: "launch".to_owned(),
            title: "Launch".to_owned(),
            status: ContentStatus::Archived,
        });

        assert!(
            store
                .post_by_slug("launch", Some(ContentStatus::Published))
                .unwrap()
                .is_none()
        );
        assert!(store.post_by_slug("launch", None).unwrap().is_some());
    }

    // MenuStore tests

    #[test]
    fn test_menu_entries_visible_scope_filters_hidden() {
        let mut hidden = entry("b", None, 1);
        hidden.is_visible = false;
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(hidden);

        let visible = store.menu_entries(MenuScope::Visible).unwrap();
        let all = store.menu_entries(MenuScope::All).unwrap();

        assert_eq!(visible.len(), 1);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_menu_entries_are_sorted() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("child", Some("root"), 0))
            .with_menu_entry(entry("second", None, 5))
            .with_menu_entry(entry("root", None, 1));

        assert_eq!(menu_ids(&store), vec!["root", "second", "child"]);
    }

    // MenuAdmin tests

    #[test]
    fn test_create_entry_assigns_id() {
        let store = MemoryStore::new();

        let created = store
            .create_entry(new_entry(MenuItemType::BlogIndex))
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(menu_ids(&store), vec![created.id]);
    }

    #[test]
    fn test_create_external_link_requires_url() {
        let store = MemoryStore::new();

        let err = store
            .create_entry(new_entry(MenuItemType::ExternalLink))
            .unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Invalid);
    }

    #[test]
    fn test_create_page_requires_target() {
        let store = MemoryStore::new();

        let err = store.create_entry(new_entry(MenuItemType::Page)).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Invalid);
        assert!(err.to_string().contains("targetId"));
    }

    #[test]
    fn test_create_unknown_type_is_invalid() {
        let store = MemoryStore::new();

        let err = store.create_entry(new_entry(MenuItemType::Other)).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Invalid);
        assert!(menu_ids(&store).is_empty());
    }

    #[test]
    fn test_update_to_unknown_type_is_invalid() {
        let store = MemoryStore::new().with_menu_entry(entry("a", None, 0));
        let patch = MenuEntryPatch {
            item_type: Some(MenuItemType::Other),
            ..Default::default()
        };

        let err = store.update_entry("a", patch).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Invalid);
        assert_eq!(
            store.menu_entries(MenuScope::All).unwrap()[0].item_type,
            MenuItemType::BlogIndex
        );
    }

    #[test]
    fn test_update_seeded_unknown_type_keeps_working() {
        let mut legacy = entry("a", None, 0);
        legacy.item_type = MenuItemType::Other;
        let store = MemoryStore::new().with_menu_entry(legacy);
        let patch = MenuEntryPatch {
            title: Some("Renamed".to_owned()),
            ..Default::default()
        };

        let updated = store.update_entry("a", patch).unwrap();

        assert_eq!(updated.title, "Renamed");
    }

    #[test]
    fn test_create_entry_unknown_parent() {
        let store = MemoryStore::new();
        let mut new = new_entry(MenuItemType::BlogIndex);
        new.parent_id = Some("ghost".to_owned());

        let err = store.create_entry(new).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_update_entry_applies_patch() {
        let store = MemoryStore::new().with_menu_entry(entry("a", None, 0));
        let patch = MenuEntryPatch {
            title: Some("Renamed".to_owned()),
            slug: Some("renamed".to_owned()),
            ..Default::default()
        };

        let updated = store.update_entry("a", patch).unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.slug, "renamed");
        assert_eq!(store.menu_entries(MenuScope::All).unwrap()[0], updated);
    }

    #[test]
    fn test_update_entry_rejects_cycle() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", Some("a"), 0));
        let patch = MenuEntryPatch {
            parent_id: Some(Some("b".to_owned())),
            ..Default::default()
        };

        let err = store.update_entry("a", patch).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Conflict);
        assert_eq!(store.menu_entries(MenuScope::All).unwrap()[0].parent_id, None);
    }

    #[test]
    fn test_update_entry_rejects_self_parent() {
        let store = MemoryStore::new().with_menu_entry(entry("a", None, 0));
        let patch = MenuEntryPatch {
            parent_id: Some(Some("a".to_owned())),
            ..Default::default()
        };

        let err = store.update_entry("a", patch).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Conflict);
    }

    #[test]
    fn test_update_unknown_entry() {
        let store = MemoryStore::new();

        let err = store
            .update_entry("ghost", MenuEntryPatch::default())
            .unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_delete_entry_promotes_children() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", Some("a"), 0));

        store.delete_entry("a").unwrap();

        let entries = store.menu_entries(MenuScope::All).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "b");
        assert_eq!(entries[0].parent_id, None);
    }

    #[test]
    fn test_reorder_applies_all_items() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", None, 1))
            .with_menu_entry(entry("c", None, 2));
        let items = vec![
            ReorderItem {
                id: "c".to_owned(),
                sort_order: 0,
                parent_id: None,
            },
            ReorderItem {
                id: "a".to_owned(),
                sort_order: 2,
                parent_id: None,
            },
            ReorderItem {
                id: "b".to_owned(),
                sort_order: 0,
                parent_id: Some(Some("c".to_owned())),
            },
        ];

        store.reorder(&items).unwrap();

        assert_eq!(menu_ids(&store), vec!["c", "a", "b"]);
        let entries = store.menu_entries(MenuScope::All).unwrap();
        assert_eq!(entries[2].parent_id.as_deref(), Some("c"));
    }

    #[test]
    fn test_reorder_null_parent_moves_to_root() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", Some("a"), 0));
        let items = vec![ReorderItem {
            id: "b".to_owned(),
            sort_order: 1,
            parent_id: Some(None),
        }];

        store.reorder(&items).unwrap();

        assert_eq!(menu_ids(&store), vec!["a", "b"]);
        assert!(
            store
                .menu_entries(MenuScope::All)
                .unwrap()
                .iter()
                .all(|e| e.parent_id.is_none())
        );
    }

    #[test]
    fn test_reorder_unknown_id_applies_nothing() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", None, 1));
        let items = vec![
            ReorderItem {
                id: "b".to_owned(),
                sort_order: 0,
                parent_id: None,
            },
            ReorderItem {
                id: "ghost".to_owned(),
                sort_order: 1,
                parent_id: None,
            },
        ];

        let err = store.reorder(&items).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(menu_ids(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_duplicate_id_applies_nothing() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", Some("a"), 0));
        let items = vec![
            ReorderItem {
                id: "b".to_owned(),
                sort_order: 3,
                parent_id: None,
            },
            ReorderItem {
                id: "a".to_owned(),
                sort_order: 0,
                parent_id: Some(Some("b".to_owned())),
            },
            ReorderItem {
                id: "b".to_owned(),
                sort_order: 3,
                parent_id: Some(Some("a".to_owned())),
            },
        ];

        let err = store.reorder(&items).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Invalid);
        let entries = store.menu_entries(MenuScope::All).unwrap();
        assert_eq!(entries[1].sort_order, 0);
    }

    #[test]
    fn test_reorder_parent_cycle_is_conflict() {
        let store = MemoryStore::new()
            .with_menu_entry(entry("a", None, 0))
            .with_menu_entry(entry("b", Some("a"), 0));
        let items = vec![ReorderItem {
            id: "a".to_owned(),
            sort_order: 0,
            parent_id: Some(Some("b".to_owned())),
        }];

        let err = store.reorder(&items).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Conflict);
        assert_eq!(menu_ids(&store), vec!["a", "b"]);
    }
}
