//! `cms menu` command implementation.

use std::path::PathBuf;

use clap::Args;
use cms_menu::MenuNode;
use cms_storage::MenuScope;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    /// Path to configuration file (default: auto-discover cms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML content seed file (overrides config).
    #[arg(short, long)]
    seed_file: Option<PathBuf>,

    /// Include hidden entries.
    #[arg(short, long)]
    all: bool,
}

impl MenuArgs {
    /// Execute the menu command, printing the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let menu = super::load_menu(self.config.as_deref(), self.seed_file)?;

        let scope = if self.all {
            MenuScope::All
        } else {
            MenuScope::Visible
        };
        let nodes = menu.tree(scope)?;
        if nodes.is_empty() {
            output.info("Menu is empty.");
            return Ok(());
        }

        for (line, href) in tree_lines(&nodes) {
            output.result_with_note(&line, &href);
        }

        Ok(())
    }
}

/// Flatten a tree into indented `(label, href)` lines, depth-first.
fn tree_lines(nodes: &[MenuNode]) -> Vec<(String, String)> {
    fn walk(nodes: &[MenuNode], depth: usize, lines: &mut Vec<(String, String)>) {
        for node in nodes {
            let entry = &node.entry.entry;
            let mut label = format!("{}{} [{}]", "  ".repeat(depth), entry.title, entry.item_type);
            if !entry.is_visible {
                label.push_str(" (hidden)");
            }
            lines.push((label, node.entry.href()));
            walk(&node.children, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(nodes, 0, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use cms_menu::ResolvedMenuEntry;
    use cms_storage::{MenuEntry, MenuItemType};
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(id: &str, item_type: MenuItemType, segments: &[&str]) -> MenuNode {
        MenuNode {
            entry: ResolvedMenuEntry {
                entry: MenuEntry {
                    id: id.to_owned(),
                    title: id.to_owned(),
                    item_type,
                    url: None,
                    target_id: None,
                    parent_id: None,
                    sort_order: 0,
                    is_visible: true,
                    open_new_window: false,
                    slug: id.to_lowercase(),
                },
                target_slug: None,
                path_segments: segments.iter().map(|s| (*s).to_owned()).collect(),
                target_resolved: false,
            },
            children: Vec::new(),
        }
    }

    #[test]
    fn test_tree_lines_indents_children() {
        let mut blog = node("Blog", MenuItemType::BlogIndex, &["blog"]);
        blog.children.push(node("Tech", MenuItemType::Category, &["blog", "tech"]));
        let home = node("Home", MenuItemType::Page, &[]);

        let lines = tree_lines(&[home, blog]);

        assert_eq!(
            lines,
            vec![
                ("Home [PAGE]".to_owned(), "/".to_owned()),
                ("Blog [BLOG_INDEX]".to_owned(), "/blog".to_owned()),
                ("  Tech [CATEGORY]".to_owned(), "/blog/tech".to_owned()),
            ]
        );
    }

    #[test]
    fn test_tree_lines_marks_hidden() {
        let mut old = node("Old", MenuItemType::Page, &["old"]);
        old.entry.entry.is_visible = false;

        let lines = tree_lines(&[old]);

        assert_eq!(lines[0].0, "Old [PAGE] (hidden)");
    }

    #[test]
    fn test_tree_lines_external_link_uses_url() {
        let mut docs = node("Docs", MenuItemType::ExternalLink, &["docs"]);
        docs.entry.entry.url = Some("https://docs.example.com".to_owned());

        let lines = tree_lines(&[docs]);

        assert_eq!(lines[0].1, "https://docs.example.com");
    }
}
