//! Collaborator traits and error types.
//!
//! Provides [`ContentLookup`], [`MenuStore`] and [`MenuAdmin`], along with
//! [`StorageError`] for unified error handling across backends.
//!
//! # Ordering contract
//!
//! [`MenuStore::menu_entries`] returns entries ordered by
//! `(parent_id, sort_order, id)` with root entries first. Path computation
//! and tree building rely on this order and never re-sort.
//! [`sort_menu_entries`] applies it for backends that cannot sort natively.

use std::collections::HashMap;

use crate::record::{
    CategoryRecord, ContentStatus, MenuEntry, MenuEntryPatch, NewMenuEntry, PageRecord, PageRef,
    PostRecord, ReorderItem, SlugRef,
};

/// Which menu entries a listing returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuScope {
    /// Only entries with `is_visible` set (public navigation).
    Visible,
    /// Every entry (admin listing).
    All,
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Record does not exist.
    NotFound,
    /// Write rejected by validation.
    Invalid,
    /// Write would break tree structure (e.g. a parent cycle).
    Conflict,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (not found, invalid input).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (service unavailable).
    Persistent,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Retry guidance.
    pub status: ErrorStatus,
    /// Record context, e.g. `"menu entry m1"`.
    pub entity: Option<String>,
    /// Backend identifier (e.g., "Memory", "Mock").
    pub backend: Option<&'static str>,
    message: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            entity: None,
            backend: None,
            message: None,
            source: None,
        }
    }

    /// Attach record context.
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach a human-readable detail.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Detail message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Create a not found error for a record.
    #[must_use]
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_entity(entity)
    }

    /// Create a validation error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Invalid).with_message(message)
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Unavailable)
            .with_status(ErrorStatus::Persistent)
            .with_message(message)
    }

    /// True when the failure is an infrastructure problem rather than a
    /// rejected request.
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self.kind,
            StorageErrorKind::Unavailable | StorageErrorKind::Timeout | StorageErrorKind::Other
        )
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (entity: menu entry m1)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::Invalid => "Invalid",
            StorageErrorKind::Conflict => "Conflict",
            StorageErrorKind::Unavailable => "Unavailable",
            StorageErrorKind::Timeout => "Timeout",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        } else if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(entity) = &self.entity {
            write!(f, " (entity: {entity})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to content tables.
///
/// Batched methods take an id set and return the rows that exist, in any
/// order; missing ids are simply absent from the result. Slug methods
/// return `Ok(None)` when nothing matches.
pub trait ContentLookup: Send + Sync {
    /// Look up pages by id, one round trip for the whole set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn pages_by_ids(&self, ids: &[String]) -> Result<Vec<PageRef>, StorageError>;

    /// Look up categories by id, one round trip for the whole set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn categories_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError>;

    /// Look up posts by id, one round trip for the whole set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn posts_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError>;

    /// Find a page by slug, optionally restricted to a status.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn page_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PageRecord>, StorageError>;

    /// Find the page flagged as homepage with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn homepage(&self, status: ContentStatus) -> Result<Option<PageRecord>, StorageError>;

    /// Find a category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn category_by_slug(&self, slug: &str) -> Result<Option<CategoryRecord>, StorageError>;

    /// Find a post by slug, optionally restricted to a status.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn post_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PostRecord>, StorageError>;
}

/// Read access to navigation entries.
pub trait MenuStore: Send + Sync {
    /// Return menu entries in `(parent_id, sort_order, id)` order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails.
    fn menu_entries(&self, scope: MenuScope) -> Result<Vec<MenuEntry>, StorageError>;
}

/// Write access to navigation entries for the admin surface.
pub trait MenuAdmin: Send + Sync {
    /// Create an entry and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::Invalid`] for inconsistent type/target/url
    /// combinations and [`StorageErrorKind::NotFound`] for an unknown parent.
    fn create_entry(&self, entry: NewMenuEntry) -> Result<MenuEntry, StorageError>;

    /// Apply a partial update and return the updated entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NotFound`] for an unknown entry or parent
    /// and [`StorageErrorKind::Conflict`] when the new parent would create a
    /// cycle.
    fn update_entry(&self, id: &str, patch: MenuEntryPatch) -> Result<MenuEntry, StorageError>;

    /// Delete an entry. Its children become root entries.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NotFound`] for an unknown entry.
    fn delete_entry(&self, id: &str) -> Result<(), StorageError>;

    /// Apply a bulk `sort_order`/`parent_id` update atomically: either every
    /// item is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NotFound`] for unknown ids,
    /// [`StorageErrorKind::Invalid`] for duplicate ids and
    /// [`StorageErrorKind::Conflict`] for parent cycles.
    fn reorder(&self, items: &[ReorderItem]) -> Result<(), StorageError>;
}

/// Sort entries into the [`MenuStore`] ordering contract.
pub fn sort_menu_entries(entries: &mut [MenuEntry]) {
    entries.sort_by(|a, b| {
        (&a.parent_id, a.sort_order, &a.id).cmp(&(&b.parent_id, b.sort_order, &b.id))
    });
}

/// Return the id of an entry whose parent chain runs into a cycle, if any.
///
/// `parents` maps every entry id to its (proposed) parent id.
pub(crate) fn find_cycle<'a>(parents: &HashMap<&'a str, Option<&'a str>>) -> Option<&'a str> {
    let limit = parents.len();
    for &start in parents.keys() {
        let mut current = parents.get(start).copied().flatten();
        let mut steps = 0;
        while let Some(id) = current {
            if id == start || steps > limit {
                return Some(start);
            }
            steps += 1;
            current = parents.get(id).copied().flatten();
        }
    }
    None
}
