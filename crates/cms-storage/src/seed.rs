//! YAML seed documents for [`MemoryStore`](crate::MemoryStore).
//!
//! A seed holds every table the menu engine reads:
//!
//! ```yaml
//! pages:
//!   - { id: p1, slug: home, title: Home, status: PUBLISHED, isHomepage: true }
//! categories:
//!   - { id: c1, slug: news, name: News }
//! posts:
//!   - { id: t1, slug: launch, title: Launch, status: PUBLISHED }
//! menu:
//!   - { id: m1, title: News, type: CATEGORY, targetId: c1, slug: news }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::record::{CategoryRecord, MenuEntry, PageRecord, PostRecord};
use crate::storage::find_cycle;

/// Error loading a seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// File could not be read.
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML is malformed or has the wrong shape.
    #[error("Invalid seed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Content violates a table invariant.
    #[error("Invalid seed: {0}")]
    Validation(String),
}

/// Contents of all tables, as loaded from YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub pages: Vec<PageRecord>,
    pub categories: Vec<CategoryRecord>,
    pub posts: Vec<PostRecord>,
    pub menu: Vec<MenuEntry>,
}

/// Reject the first id that appears twice in a table.
fn require_unique_ids<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::Validation(format!(
                "duplicate id '{id}' in {table}"
            )));
        }
    }
    Ok(())
}

impl Seed {
    /// Load and validate a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file can't be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            pages = seed.pages.len(),
            categories = seed.categories.len(),
            posts = seed.posts.len(),
            menu = seed.menu.len(),
            "Loaded seed"
        );
        Ok(seed)
    }

    /// Parse and validate seed YAML. Empty content yields an empty seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the YAML is malformed or violates a table
    /// invariant.
    pub fn from_yaml(content: &str) -> Result<Self, SeedError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let seed: Self = serde_yaml::from_str(trimmed)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check table invariants: unique ids, at most one homepage and an
/// acyclic menu.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), SeedError> {
        require_unique_ids("pages", self.pages.iter().map(|p| p.id.as_str()))?;
        require_unique_ids("categories", self.categories.iter().map(|c| c.id.as_str()))?;
        require_unique_ids("posts", self.posts.iter().map(|p| p.id.as_str()))?;
        require_unique_ids("menu", self.menu.iter().map(|m| m.id.as_str()))?;

        let homepages: Vec<_> = self
            .pages
            .iter()
            .filter(|p| p.is_homepage)
            .map(|p| p.id.as_str())
            .collect();
        if homepages.len() > 1 {
            return Err(SeedError::Validation(format!(
                "only one page may be the homepage, found: {}",
                homepages.join(", ")
            )));
        }

        let parents: HashMap<&str, Option<&str>> = self
            .menu
            .iter()
            .map(|m| (m.id.as_str(), m.parent_id.as_deref()))
            .collect();
        if let Some(id) = find_cycle(&parents) {
            return Err(SeedError::Validation(format!(
                "menu entry '{id}' is part of a parent cycle"
            )));
        }

        Ok(())
    }
}
