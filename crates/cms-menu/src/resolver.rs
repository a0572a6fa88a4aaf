//! Request path resolution.
//!
//! [`PathResolver`] maps an incoming path to the content it addresses:
//!
//! 1. An empty path (after trimming `/`) is the published homepage.
//! 2. Otherwise the visible menu entry with the longest path that is a
//!    prefix of the request wins; equal lengths go to the lower
//!    [`priority`](cms_storage::MenuItemType::priority).
//! 3. An exact match resolves the entry's own target. A shorter match
//!    treats the last request segment as a published post slug.
//! 4. When the menu gives nothing, content tables are probed directly by
//!    slug (category, page, category, post), stopping at the first hit.
//!
//! "No match" is [`Resolution::NotFound`], never an error.

use cms_storage::{
    CategoryRecord, ContentLookup, ContentStatus, MenuItemType, PageRecord, PostRecord,
};
use serde::Serialize;

use crate::entry::ResolvedMenuEntry;
use crate::error::MenuError;

const DEFAULT_BLOG_TITLE: &str = "Blog";

/// Outcome of resolving a request path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    Homepage {
        payload: PageRecord,
    },
    Page {
        payload: PageRecord,
    },
    Category {
        payload: CategoryRecord,
    },
    Post {
        payload: PostRecord,
        /// Present when the post was reached below a menu entry.
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<PostContext>,
    },
    Blog {
        payload: BlogIndex,
    },
    NotFound,
}

impl Resolution {
    /// Wire tag of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Homepage { .. } => "homepage",
            Self::Page { .. } => "page",
            Self::Category { .. } => "category",
            Self::Post { .. } => "post",
            Self::Blog { .. } => "blog",
            Self::NotFound => "not_found",
        }
    }

    /// True for [`Resolution::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Menu entry that anchored a nested post match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContext {
    pub base_type: MenuItemType,
}

/// Synthetic payload of a blog index entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogIndex {
    pub slug: String,
    pub title: String,
}

/// Resolves request paths against a computed entry set.
///
/// Holds no state of its own; resolving the same path twice over the same
/// entries and content yields the same result.
pub struct PathResolver<'a> {
    entries: &'a [ResolvedMenuEntry],
    lookup: &'a dyn ContentLookup,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver over entries produced by
    /// [`compute_paths`](crate::compute_paths).
    #[must_use]
    pub fn new(entries: &'a [ResolvedMenuEntry], lookup: &'a dyn ContentLookup) -> Self {
        Self { entries, lookup }
    }

    /// Resolve a raw request path.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Lookup`] if a content lookup fails.
    pub fn resolve(&self, raw_path: &str) -> Result<Resolution, MenuError> {
        let segments: Vec<&str> = raw_path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(&last) = segments.last() else {
            tracing::debug!("Resolving homepage");
            return Ok(self
                .lookup
                .homepage(ContentStatus::Published)?
                .map_or(Resolution::NotFound, |payload| Resolution::Homepage { payload }));
        };

        if let Some(best) = self.best_match(&segments) {
            tracing::debug!(
                path = raw_path,
                entry = %best.entry.id,
                kind = %best.entry.item_type,
                depth = best.path_segments.len(),
                "Menu match"
            );
            if best.path_segments.len() == segments.len() {
                if let Some(resolution) = self.resolve_exact(best)? {
                    return Ok(resolution);
                }
            } else if let Some(payload) = self
                .lookup
                .post_by_slug(last, Some(ContentStatus::Published))?
            {
                return Ok(Resolution::Post {
                    payload,
                    context: Some(PostContext {
                        base_type: best.entry.item_type,
                    }),
                });
            }
        }

        tracing::debug!(path = raw_path, "No menu resolution, trying slug fallbacks");
        self.resolve_fallback(&segments, last)
    }

    /// Longest visible entry path that prefixes `segments`; ties go to the
    /// lower type priority, then to the earlier entry.
    fn best_match(&self, segments: &[&str]) -> Option<&'a ResolvedMenuEntry> {
        let mut best: Option<&'a ResolvedMenuEntry> = None;
        for candidate in self.entries.iter().filter(|e| is_candidate(e, segments)) {
            let better = best.is_none_or(|b| {
                let (len, b_len) = (candidate.path_segments.len(), b.path_segments.len());
                len > b_len
                    || (len == b_len
                        && candidate.entry.item_type.priority() < b.entry.item_type.priority())
            });
            if better {
                best = Some(candidate);
            }
        }
        best
    }

    /// Resolve the target of an entry whose path equals the request.
    ///
    /// Returns `None` when the entry yields nothing, so the caller can
    /// continue with the slug fallbacks. Dangling targets never match.
    fn resolve_exact(&self, best: &ResolvedMenuEntry) -> Result<Option<Resolution>, MenuError> {
        let target = best
            .target_slug
            .as_deref()
            .filter(|_| best.target_resolved);

        let resolution = match (best.entry.item_type, target) {
            (MenuItemType::Page, Some(slug)) => self
                .lookup
                .page_by_slug(slug, None)?
                .map(|payload| Resolution::Page { payload }),
            (MenuItemType::Category, Some(slug)) => self
                .lookup
                .category_by_slug(slug)?
                .map(|payload| Resolution::Category { payload }),
            (MenuItemType::BlogIndex, _) => {
                let title = if best.entry.title.is_empty() {
                    DEFAULT_BLOG_TITLE.to_owned()
                } else {
                    best.entry.title.clone()
                };
                Some(Resolution::Blog {
                    payload: BlogIndex {
                        slug: best.entry.slug.clone(),
                        title,
                    },
                })
            }
            _ => None,
        };
        Ok(resolution)
    }

    /// Direct slug lookups, first hit wins.
    fn resolve_fallback(&self, segments: &[&str], last: &str) -> Result<Resolution, MenuError> {
        let published = Some(ContentStatus::Published);

        // Single segment: legacy category URL
        if segments.len() == 1
            && let Some(payload) = self.lookup.category_by_slug(last)?
        {
            return Ok(Resolution::Category { payload });
        }
        if let Some(payload) = self.lookup.page_by_slug(last, published)? {
            return Ok(Resolution::Page { payload });
        }
        // Already probed above for single-segment paths
        if segments.len() > 1
            && let Some(payload) = self.lookup.category_by_slug(last)?
        {
            return Ok(Resolution::Category { payload });
        }
        if let Some(payload) = self.lookup.post_by_slug(last, published)? {
            return Ok(Resolution::Post {
                payload,
                context: None,
            });
        }

        Ok(Resolution::NotFound)
    }
}

/// Visible entry with a non-empty path that is a prefix of `segments`.
fn is_candidate(entry: &ResolvedMenuEntry, segments: &[&str]) -> bool {
    let path = &entry.path_segments;
    entry.entry.is_visible
        && !path.is_empty()
        && path.len() <= segments.len()
        && path.iter().zip(segments).all(|(a, b)| a == b)
}
