//! Target slug resolution.
//!
//! Menu entries reference content by internal id. Links need the public
//! slug, so every entry's `target_id` is translated through one batched
//! lookup per content type (never one lookup per entry). The three batches
//! are independent and run concurrently on the rayon pool.

use std::collections::{BTreeSet, HashMap};

use cms_storage::{ContentLookup, MenuEntry, MenuItemType, StorageError};

use crate::error::MenuError;

/// Public slug resolved for one menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSlug {
    /// Content slug, or the raw `target_id` if the reference dangles.
    pub slug: String,
    /// False when no content row matched the `target_id`.
    pub resolved: bool,
    /// True when the target is the page flagged as homepage.
    pub is_homepage: bool,
}

/// Target slugs keyed by menu entry id.
#[derive(Debug, Default)]
pub struct TargetSlugs {
    by_entry: HashMap<String, TargetSlug>,
}

impl TargetSlugs {
    /// Get the target of a menu entry.
    #[must_use]
    pub fn get(&self, entry_id: &str) -> Option<&TargetSlug> {
        self.by_entry.get(entry_id)
    }

    /// True when the entry targets the homepage page.
    #[must_use]
    pub fn is_homepage(&self, entry_id: &str) -> bool {
        self.by_entry.get(entry_id).is_some_and(|t| t.is_homepage)
    }

    /// Number of entries with a target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_entry.len()
    }

    /// True when no entry has a target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_entry.is_empty()
    }
}

/// Non-empty `target_id`s of all entries of one type, deduplicated.
fn target_ids(entries: &[MenuEntry], item_type: MenuItemType) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.item_type == item_type)
        .filter_map(|e| e.target_id.as_deref())
        .filter(|id| !id.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Run a batch lookup, skipping the round trip for an empty id set.
fn batch<T>(
    ids: &[String],
    fetch: impl FnOnce(&[String]) -> Result<Vec<T>, StorageError>,
) -> Result<Vec<T>, StorageError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    fetch(ids)
}

/// Resolve the target slug of every entry that references content.
///
/// Issues at most three lookups: one each for pages, categories and posts.
/// Entries whose target does not exist keep their raw `target_id` as slug
/// (marked unresolved) so a dangling reference degrades one link instead of
/// failing the whole menu.
///
/// # Errors
///
/// Returns [`MenuError::Lookup`] if any batch fails.
pub fn resolve_target_slugs(
    lookup: &dyn ContentLookup,
    entries: &[MenuEntry],
) -> Result<TargetSlugs, MenuError> {
    let page_ids = target_ids(entries, MenuItemType::Page);
    let category_ids = target_ids(entries, MenuItemType::Category);
    let post_ids = target_ids(entries, MenuItemType::Post);

    let (pages, (categories, posts)) = rayon::join(
        || batch(&page_ids, |ids| lookup.pages_by_ids(ids)),
        || {
            rayon::join(
                || batch(&category_ids, |ids| lookup.categories_by_ids(ids)),
                || batch(&post_ids, |ids| lookup.posts_by_ids(ids)),
            )
        },
    );

    let pages: HashMap<String, (String, bool)> = pages?
        .into_iter()
        .map(|p| (p.id, (p.slug, p.is_homepage)))
        .collect();
    let categories: HashMap<String, String> =
        categories?.into_iter().map(|c| (c.id, c.slug)).collect();
    let posts: HashMap<String, String> = posts?.into_iter().map(|p| (p.id, p.slug)).collect();

    let mut by_entry = HashMap::new();
    for entry in entries {
        let Some(target_id) = entry.target_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        let found = match entry.item_type {
            MenuItemType::Page => pages
                .get(target_id)
                .map(|(slug, is_homepage)| (slug.clone(), *is_homepage)),
            MenuItemType::Category => categories.get(target_id).map(|slug| (slug.clone(), false)),
            MenuItemType::Post => posts.get(target_id).map(|slug| (slug.clone(), false)),
            MenuItemType::ExternalLink | MenuItemType::BlogIndex | MenuItemType::Other => {
                continue;
            }
        };

        let target = if let Some((slug, is_homepage)) = found {
            TargetSlug {
                slug,
                resolved: true,
                is_homepage,
            }
        } else {
            tracing::warn!(
                entry = %entry.id,
                target = %target_id,
                kind = %entry.item_type,
                "Menu entry target not found"
            );
            TargetSlug {
                slug: target_id.to_owned(),
                resolved: false,
                is_homepage: false,
            }
        };
        by_entry.insert(entry.id.clone(), target);
    }

    Ok(TargetSlugs { by_entry })
}
