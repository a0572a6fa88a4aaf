//! Mock lookup implementation for testing.
//!
//! Provides [`MockLookup`], a [`MemoryStore`] wrapper that records every
//! collaborator call and can simulate an unavailable backend.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::memory::MemoryStore;
use crate::record::{
    CategoryRecord, ContentStatus, MenuEntry, PageRecord, PageRef, PostRecord, SlugRef,
};
use crate::storage::{ContentLookup, MenuScope, MenuStore, StorageError};

/// Call-recording lookup for testing.
///
/// # Example
///
/// ```ignore
/// use cms_storage::{MemoryStore, MockLookup};
///
/// let lookup = MockLookup::new(MemoryStore::new());
/// lookup.pages_by_ids(&["p1".to_owned()])?;
/// assert_eq!(lookup.calls("pages_by_ids"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockLookup {
    inner: MemoryStore,
    calls: Mutex<Vec<&'static str>>,
    unavailable: AtomicBool,
}

impl MockLookup {
    /// Wrap a store.
    #[must_use]
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with an unavailable error.
    #[must_use]
    pub fn unavailable(self) -> Self {
        self.unavailable.store(true, Ordering::SeqCst);
        self
    }

    /// Number of calls made to the named method.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|&&m| m == method)
            .count()
    }

    /// Method names in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn call_log(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Record a call and fail if the backend is marked unavailable.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    fn record(&self, method: &'static str) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(method);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("connection refused").with_backend("Mock"));
        }
        Ok(())
    }
}

impl ContentLookup for MockLookup {
    fn pages_by_ids(&self, ids: &[String]) -> Result<Vec<PageRef>, StorageError> {
        self.record("pages_by_ids")?;
        self.inner.pages_by_ids(ids)
    }

    fn categories_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError> {
        self.record("categories_by_ids")?;
        self.inner.categories_by_ids(ids)
    }

    fn posts_by_ids(&self, ids: &[String]) -> Result<Vec<SlugRef>, StorageError> {
        self.record("posts_by_ids")?;
        self.inner.posts_by_ids(ids)
    }

    fn page_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PageRecord>, StorageError> {
        self.record("page_by_slug")?;
        self.inner.page_by_slug(slug, status)
    }

    fn homepage(&self, status: ContentStatus) -> Result<Option<PageRecord>, StorageError> {
        self.record("homepage")?;
        self.inner.homepage(status)
    }

    fn category_by_slug(&self, slug: &str) -> Result<Option<CategoryRecord>, StorageError> {
        self.record("category_by_slug")?;
        self.inner.category_by_slug(slug)
    }

    fn post_by_slug(
        &self,
        slug: &str,
        status: Option<ContentStatus>,
    ) -> Result<Option<PostRecord>, StorageError> {
        self.record("post_by_slug")?;
        self.inner.post_by_slug(slug, status)
    }
}

impl MenuStore for MockLookup {
    fn menu_entries(&self, scope: MenuScope) -> Result<Vec<MenuEntry>, StorageError> {
        self.record("menu_entries")?;
        self.inner.menu_entries(scope)
    }
}
