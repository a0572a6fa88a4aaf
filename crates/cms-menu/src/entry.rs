//! Menu entries augmented with derived fields.

use cms_storage::{MenuEntry, MenuItemType};
use serde::Serialize;

/// [`MenuEntry`] plus the fields computed by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMenuEntry {
    #[serde(flatten)]
    pub entry: MenuEntry,
    /// Public slug of the target content. Holds the raw `target_id` when
    /// the reference dangles; `None` for entries without a target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_slug: Option<String>,
    /// Slugs from root to this entry, homepage segments elided.
    pub path_segments: Vec<String>,
    /// False when `target_slug` is an unresolved raw id.
    #[serde(skip)]
    pub target_resolved: bool,
}

impl ResolvedMenuEntry {
    /// URL path with leading slash (`"/"` for an empty path).
    #[must_use]
    pub fn url_path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }

    /// Link target: the external URL for external links, otherwise the
    /// computed path.
    #[must_use]
    pub fn href(&self) -> String {
        match (&self.entry.item_type, &self.entry.url) {
            (MenuItemType::ExternalLink, Some(url)) => url.clone(),
            _ => self.url_path(),
        }
    }
}
