//! Records owned by the content and menu collaborators.
//!
//! Wire names follow the admin API: camelCase fields, SCREAMING_SNAKE_CASE
//! enum tags (`PAGE`, `EXTERNAL_LINK`, `PUBLISHED`, ...).

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuItemType {
    /// Links to a [`PageRecord`] through `target_id`.
    Page,
    /// Links to a [`PostRecord`] through `target_id`.
    Post,
    /// Links to a [`CategoryRecord`] through `target_id`.
    Category,
    /// Links to an arbitrary `url`.
    ExternalLink,
    /// Synthetic blog listing, no content behind it.
    BlogIndex,
    /// Any tag this build does not know about yet.
    #[serde(other)]
    Other,
}

impl MenuItemType {
    /// Tie-break rank used when two menu paths match the same number of
    /// segments. Lower wins.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Page => 0,
            Self::Category => 1,
            Self::BlogIndex => 2,
            Self::Post | Self::ExternalLink | Self::Other => 5,
        }
    }

    /// True for types whose `target_id` points into a content table.
    #[must_use]
    pub fn targets_content(self) -> bool {
        matches!(self, Self::Page | Self::Post | Self::Category)
    }

    /// Wire name of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::Post => "POST",
            Self::Category => "CATEGORY",
            Self::ExternalLink => "EXTERNAL_LINK",
            Self::BlogIndex => "BLOG_INDEX",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for MenuItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication status of pages and posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

fn default_visible() -> bool {
    true
}

/// Navigation node as stored by the menu collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: MenuItemType,
    /// Only meaningful for [`MenuItemType::ExternalLink`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Only meaningful for page, post and category entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    /// `None` for root entries.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub open_new_window: bool,
    /// Segment contributed to this entry's path and its descendants'.
    /// Empty contributes nothing.
    #[serde(default)]
    pub slug: String,
}

/// Page row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub is_homepage: bool,
}

/// Category row. Categories carry no status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// Post row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub status: ContentStatus,
}

/// Projection returned by batched page lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRef {
    pub id: String,
    pub slug: String,
    pub is_homepage: bool,
}

/// Projection returned by batched category and post lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugRef {
    pub id: String,
    pub slug: String,
}

impl From<&PageRecord> for PageRef {
    fn from(page: &PageRecord) -> Self {
        Self {
            id: page.id.clone(),
            slug: page.slug.clone(),
            is_homepage: page.is_homepage,
        }
    }
}

impl From<&CategoryRecord> for SlugRef {
    fn from(category: &CategoryRecord) -> Self {
        Self {
            id: category.id.clone(),
            slug: category.slug.clone(),
        }
    }
}

impl From<&PostRecord> for SlugRef {
    fn from(post: &PostRecord) -> Self {
        Self {
            id: post.id.clone(),
            slug: post.slug.clone(),
        }
    }
}

/// Distinguish an absent field from an explicit `null`.
///
/// Absent deserializes to `None` (via `#[serde(default)]`), `null` to
/// `Some(None)` and a value to `Some(Some(v))`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Payload for creating a menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: MenuItemType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub open_new_window: bool,
    #[serde(default)]
    pub slug: String,
}

/// Partial update for a menu entry. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntryPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<MenuItemType>,
    #[serde(default, deserialize_with = "double_option")]
    pub url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub target_id: Option<Option<String>>,
    /// `Some(None)` moves the entry to the root level.
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
    pub open_new_window: Option<bool>,
    pub slug: Option<String>,
}

/// One line of a bulk reorder request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub id: String,
    pub sort_order: i32,
    /// Absent keeps the current parent, `null` moves to root.
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<String>>,
}
