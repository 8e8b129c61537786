//! Item and Group types for palette results.

use serde::{Deserialize, Serialize};

use crate::action::StaticCommand;

/// Category that collects every pinned snippet, quicklink and clipboard entry.
pub const PINNED: &str = "Pinned";

/// Synthetic trailing category holding the create-snippet/create-quicklink entries.
pub const ACTIONS: &str = "Actions";

pub const SNIPPETS: &str = "Snippets";
pub const QUICKLINKS: &str = "Quicklinks";
pub const CLIPBOARD_HISTORY: &str = "Clipboard History";
pub const APPLICATIONS: &str = "Applications";
pub const SYSTEM: &str = "System";

/// Variant payload carried by an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Keyword-triggered text template.
    Snippet { body: String },

    /// Named URL or deeplink template.
    Quicklink { link: String },

    /// A captured clipboard entry.
    ClipboardEntry { content: String },

    /// An application that can be launched.
    InstalledApp { launch_path: String },

    /// A built-in command with no user data behind it.
    StaticAction { command: StaticCommand },
}

impl ItemKind {
    /// Short lower-case name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Snippet { .. } => "snippet",
            ItemKind::Quicklink { .. } => "quicklink",
            ItemKind::ClipboardEntry { .. } => "clipboard",
            ItemKind::InstalledApp { .. } => "app",
            ItemKind::StaticAction { .. } => "action",
        }
    }
}

/// An item is the atomic unit of the palette list.
///
/// Everything users search, select, and act upon is an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the current list.
    pub id: String,

    /// Primary display text.
    pub label: String,

    /// Secondary display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Display category used for grouping.
    pub category: String,

    /// Extra search terms.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Icon key, resolved by the presentation layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub pinned: bool,

    /// Variant payload.
    pub kind: ItemKind,
}

impl Item {
    /// Create a new item with required fields.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtitle: None,
            category: category.into(),
            keywords: Vec::new(),
            icon: None,
            pinned: false,
            kind,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the item pinned and move it into the `Pinned` category.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self.category = PINNED.to_string();
        self
    }
}

/// A category of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Category name shown as the section header.
    pub title: String,

    /// Items in this group, in display order.
    pub items: Vec<Item>,
}

impl Group {
    /// Create a new group with a title.
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Ordered groups; order is render order.
pub type Groups = Vec<Group>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_moves_category() {
        let item = Item::new(
            "s1",
            "Greeting",
            SNIPPETS,
            ItemKind::Snippet {
                body: "hi".to_string(),
            },
        )
        .pinned();

        assert!(item.pinned);
        assert_eq!(item.category, PINNED);
    }

    #[test]
    fn test_item_serializes_kind_tag() {
        let item = Item::new(
            "s1",
            "Greeting",
            SNIPPETS,
            ItemKind::Snippet {
                body: "hi".to_string(),
            },
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"]["type"], "snippet");
        assert!(json.get("subtitle").is_none());
    }
}
