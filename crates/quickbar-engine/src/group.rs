//! Grouping filtered items into display categories, and flattening back.

use quickbar_core::{Group, Groups, Item, ACTIONS, PINNED};

/// Partition `items` by category.
///
/// Categories keep first-seen order, except `Pinned` which always leads.
/// `actions`, when non-empty, become a trailing `Actions` group that is
/// never reordered.
pub fn group(items: Vec<Item>, actions: Vec<Item>) -> Groups {
    let mut groups: Groups = Vec::new();

    for item in items {
        match groups.iter_mut().find(|g| g.title == item.category) {
            Some(existing) => existing.items.push(item),
            None => groups.push(Group::new(item.category.clone(), vec![item])),
        }
    }

    if let Some(pos) = groups.iter().position(|g| g.title == PINNED) {
        let pinned = groups.remove(pos);
        groups.insert(0, pinned);
    }

    if !actions.is_empty() {
        groups.push(Group::new(ACTIONS, actions));
    }

    groups
}

/// Concatenate every group's items in group order.
pub fn flatten(groups: &[Group]) -> Vec<Item> {
    groups.iter().flat_map(|g| g.items.iter().cloned()).collect()
}

/// A row in the rendered list: either a category header or an item.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    /// A group header row.
    GroupHeader { title: String },

    /// An item row.
    Item {
        item: Item,
        /// Index into the flat item list (for selection matching).
        flat_index: usize,
    },
}

/// Flatten groups into render rows, headers included.
pub fn list_entries(groups: &[Group]) -> Vec<ListEntry> {
    let mut entries = Vec::new();
    let mut flat_index = 0;

    for group in groups {
        entries.push(ListEntry::GroupHeader {
            title: group.title.clone(),
        });
        for item in &group.items {
            entries.push(ListEntry::Item {
                item: item.clone(),
                flat_index,
            });
            flat_index += 1;
        }
    }

    entries
}

/// Convert a selection index to a row index (accounting for headers).
pub fn selection_to_row(entries: &[ListEntry], selected: usize) -> usize {
    entries
        .iter()
        .position(|e| matches!(e, ListEntry::Item { flat_index, .. } if *flat_index == selected))
        .unwrap_or(0)
}
