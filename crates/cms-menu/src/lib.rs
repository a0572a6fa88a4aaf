//! Menu path computation and URL resolution for the CMS.
//!
//! This crate turns the flat, parent-referencing list of navigation entries
//! served by a [`MenuStore`](cms_storage::MenuStore) into:
//! - canonical path segments per entry, for links and breadcrumbs
//! - a nested tree for navigation rendering
//! - a [`Resolution`] for any incoming request path, via longest-prefix
//!   matching over the menu with legacy slug fallbacks
//!
//! # Pipeline
//!
//! ```text
//! MenuStore ──► resolve_target_slugs ──► compute_paths ──┬─► MenuTree
//!                 (batched lookups)      (homepage       │
//!                                         elision)       └─► PathResolver ──► Resolution
//! ```
//!
//! Every step is recomputed per call; the engine owns no state.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use cms_menu::Menu;
//! use cms_storage::{MemoryStore, MenuStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let menu = Menu::new(Arc::clone(&store) as Arc<dyn MenuStore>, store);
//!
//! // Resolve an incoming request path
//! let resolution = menu.resolve("/news/launch")?;
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod menu;
mod path;
mod resolver;
mod target;
mod tree;

pub use entry::ResolvedMenuEntry;
pub use error::MenuError;
pub use menu::{Breadcrumb, Menu};
pub use path::{MenuIndex, build_path, compute_paths};
pub use resolver::{BlogIndex, PathResolver, PostContext, Resolution};
pub use target::{TargetSlug, TargetSlugs, resolve_target_slugs};
pub use tree::{MenuNode, MenuTree};
