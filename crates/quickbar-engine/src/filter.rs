//! Case-insensitive substring filtering.

use quickbar_core::Item;

/// Check whether `item` matches an already lower-cased needle.
///
/// Label, subtitle, category and keywords are all searched.
pub fn matches(item: &Item, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);

    hit(item.label.as_str())
        || item.subtitle.as_deref().is_some_and(hit)
        || hit(item.category.as_str())
        || item.keywords.iter().any(|k| hit(k.as_str()))
}

/// Keep the items that match `query`, preserving input order.
///
/// A query that is empty after trimming is no filter at all.
pub fn filter(items: Vec<Item>, query: &str) -> Vec<Item> {
    if query.trim().is_empty() {
        return items;
    }

    let needle = query.to_lowercase();
    items.into_iter().filter(|item| matches(item, &needle)).collect()
}
