//! Building the palette list from the collaborators' records.
//!
//! ## Pipeline
//!
//! ```text
//! records ──► items (stable pin sort) ──► filter(query) ──► group(+Actions) ──► flatten
//! ```
//!
//! The whole pipeline is recomputed on every state change; nothing is cached.

use quickbar_core::{
    ClipboardEntry, Groups, InstalledApp, Item, ItemKind, Quicklink, Snippet, StaticCommand,
    SystemAction, ACTIONS, APPLICATIONS, CLIPBOARD_HISTORY, QUICKLINKS, SNIPPETS, SYSTEM,
};

use crate::filter::filter;
use crate::group::{flatten, group, list_entries, selection_to_row, ListEntry};
use crate::selection::{clamp_index, selected_item};
use crate::state::{Menu, PaletteState};

pub const ACTION_CREATE_ID: &str = "__action_create__";
pub const ACTION_CREATE_QUICKLINK_ID: &str = "__action_create_quicklink__";

// =============================================================================
// Record → Item
// =============================================================================

pub fn snippet_item(snippet: &Snippet) -> Item {
    let item = Item::new(
        &snippet.id,
        &snippet.name,
        SNIPPETS,
        ItemKind::Snippet {
            body: snippet.body.clone(),
        },
    )
    .with_subtitle(&snippet.keyword)
    .with_keywords(std::iter::once(&snippet.keyword).chain(&snippet.tags))
    .with_icon(&snippet.icon);

    if snippet.pinned {
        item.pinned()
    } else {
        item
    }
}

pub fn quicklink_item(quicklink: &Quicklink) -> Item {
    let item = Item::new(
        &quicklink.id,
        &quicklink.name,
        QUICKLINKS,
        ItemKind::Quicklink {
            link: quicklink.link.clone(),
        },
    )
    .with_subtitle(&quicklink.link)
    .with_keywords(&quicklink.tags)
    .with_icon(&quicklink.icon);

    if quicklink.pinned {
        item.pinned()
    } else {
        item
    }
}

pub fn clipboard_item(entry: &ClipboardEntry) -> Item {
    let label = if entry.preview.is_empty() {
        &entry.content
    } else {
        &entry.preview
    };

    let mut item = Item::new(
        &entry.id,
        label,
        CLIPBOARD_HISTORY,
        ItemKind::ClipboardEntry {
            content: entry.content.clone(),
        },
    )
    .with_keywords([entry.content_type.as_str()]);

    if !entry.source_app.is_empty() {
        item = item.with_subtitle(&entry.source_app);
    }

    if entry.pinned {
        item.pinned()
    } else {
        item
    }
}

pub fn app_item(app: &InstalledApp) -> Item {
    let item = Item::new(
        &app.id,
        &app.name,
        APPLICATIONS,
        ItemKind::InstalledApp {
            launch_path: app.launch_path.clone(),
        },
    )
    .with_keywords([&app.source]);

    match &app.location {
        Some(location) => item.with_subtitle(location),
        None => item,
    }
}

/// Built-in system commands shown in the root menu.
pub fn system_items() -> Vec<Item> {
    SystemAction::ALL
        .iter()
        .map(|&action| {
            Item::new(
                format!("__system_{:?}__", action).to_lowercase(),
                action.label(),
                SYSTEM,
                ItemKind::StaticAction {
                    command: StaticCommand::System { action },
                },
            )
            .with_keywords(["system", "power"])
        })
        .collect()
}

/// The two trailing create entries. Labels echo a non-empty query.
pub fn create_actions(query: &str) -> Vec<Item> {
    let q = query.trim();

    let (snippet_label, quicklink_label) = if q.is_empty() {
        ("Create a snippet".to_string(), "Create a quicklink".to_string())
    } else {
        (format!("Create \"{q}\""), format!("Quicklink \"{q}\""))
    };

    vec![
        Item::new(
            ACTION_CREATE_ID,
            snippet_label,
            ACTIONS,
            ItemKind::StaticAction {
                command: StaticCommand::CreateSnippet,
            },
        )
        .with_subtitle("Ctrl+N")
        .with_keywords(["create", "new", "add", "snippet"])
        .with_icon("Plus"),
        Item::new(
            ACTION_CREATE_QUICKLINK_ID,
            quicklink_label,
            ACTIONS,
            ItemKind::StaticAction {
                command: StaticCommand::CreateQuicklink,
            },
        )
        .with_subtitle("Ctrl+L")
        .with_keywords(["create", "new", "add", "quicklink", "link", "url"])
        .with_icon("Link"),
    ]
}

/// Map records to items, pinned records first within each source.
fn pinned_first<T>(
    records: &[T],
    is_pinned: impl Fn(&T) -> bool,
    to_item: impl Fn(&T) -> Item,
) -> Vec<Item> {
    let mut sorted: Vec<&T> = records.iter().collect();
    // sort_by_key is stable: ties keep insertion order.
    sorted.sort_by_key(|r| !is_pinned(r));
    sorted.into_iter().map(to_item).collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Snapshot of every record the palette can show.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub snippets: Vec<Snippet>,
    pub quicklinks: Vec<Quicklink>,
    pub clipboard: Vec<ClipboardEntry>,
    pub apps: Vec<InstalledApp>,
    /// Include lock/sleep/restart/shutdown entries in the root menu.
    pub system_actions: bool,
}

impl Catalog {
    /// Unfiltered items for a menu, in source order.
    pub fn items(&self, menu: Menu) -> Vec<Item> {
        match menu {
            Menu::Root => {
                let mut items = pinned_first(&self.snippets, |s| s.pinned, snippet_item);
                items.extend(pinned_first(&self.quicklinks, |q| q.pinned, quicklink_item));
                if self.system_actions {
                    items.extend(system_items());
                }
                items
            }
            Menu::Clipboard => pinned_first(&self.clipboard, |e| e.pinned, clipboard_item),
            Menu::Applications => self.apps.iter().map(app_item).collect(),
        }
    }

    /// Run the full pipeline for the given state.
    pub fn view(&self, state: &PaletteState) -> PaletteView {
        let filtered = filter(self.items(state.menu), &state.query);
        let actions = match state.menu {
            Menu::Root => create_actions(&state.query),
            Menu::Clipboard | Menu::Applications => Vec::new(),
        };

        let groups = group(filtered, actions);
        let items = flatten(&groups);
        tracing::debug!(
            "Palette view: menu={:?} query={:?} groups={} items={}",
            state.menu,
            state.query,
            groups.len(),
            items.len()
        );

        PaletteView { groups, items }
    }
}

// =============================================================================
// Palette View
// =============================================================================

/// Grouped and flattened result of one recomputation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteView {
    pub groups: Groups,
    /// Items in display order; selection indexes into this.
    pub items: Vec<Item>,
}

impl PaletteView {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item under the (clamped) selection.
    pub fn selected(&self, index: usize) -> Option<&Item> {
        selected_item(&self.items, index)
    }

    /// Render rows with headers, plus the row the selection sits on.
    pub fn rows(&self, index: usize) -> (Vec<ListEntry>, usize) {
        let rows = list_entries(&self.groups);
        let row = selection_to_row(&rows, clamp_index(index, self.len()));
        (rows, row)
    }
}
