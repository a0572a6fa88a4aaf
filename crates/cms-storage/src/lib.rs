//! Content and menu storage abstraction for the CMS menu engine.
//!
//! The menu engine never talks to a database directly. It reads through the
//! collaborator traits defined here:
//!
//! - [`ContentLookup`]: read-only access to pages, categories and posts, by
//!   id batch or by slug
//! - [`MenuStore`]: the flat list of navigation entries, ordered by
//!   `(parent_id, sort_order)`
//! - [`MenuAdmin`]: create/update/delete/reorder for the admin surface
//!
//! # Implementations
//!
//! - [`MemoryStore`]: `RwLock`-guarded tables, loadable from a YAML [`Seed`]
//! - [`MockLookup`]: call-counting, failure-injecting wrapper (behind the
//!   `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use cms_storage::{MemoryStore, MenuScope, MenuStore, Seed};
//!
//! let seed = Seed::load(Path::new("content.yaml"))?;
//! let store = MemoryStore::from_seed(seed);
//! for entry in store.menu_entries(MenuScope::Visible)? {
//!     println!("{} -> {:?}", entry.title, entry.target_id);
//! }
//! ```

mod memory;
#[cfg(feature = "mock")]
mod mock;
mod record;
mod seed;
mod storage;

pub use memory::MemoryStore;
#[cfg(feature = "mock")]
pub use mock::MockLookup;
pub use record::{
    CategoryRecord, ContentStatus, MenuEntry, MenuEntryPatch, MenuItemType, NewMenuEntry,
    PageRecord, PageRef, PostRecord, ReorderItem, SlugRef,
};
pub use seed::{Seed, SeedError};
pub use storage::{
    ContentLookup, ErrorStatus, MenuAdmin, MenuScope, MenuStore, StorageError, StorageErrorKind,
    sort_menu_entries,
};
