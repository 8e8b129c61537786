//! Keyboard selection over the flattened list.

use quickbar_core::Item;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Clamp `index` into `[0, len - 1]`, or 0 for an empty list.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Move one step, holding at either end.
pub fn move_selection(index: usize, len: usize, direction: Direction) -> usize {
    let index = clamp_index(index, len);
    match direction {
        Direction::Up => index.saturating_sub(1),
        Direction::Down => clamp_index(index + 1, len),
    }
}

/// Item at the clamped index, or `None` for an empty list.
pub fn selected_item(list: &[Item], index: usize) -> Option<&Item> {
    list.get(clamp_index(index, list.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbar_core::{ItemKind, SNIPPETS};

    fn list(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| {
                Item::new(
                    i.to_string(),
                    format!("Item {i}"),
                    SNIPPETS,
                    ItemKind::Snippet {
                        body: String::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_move_holds_at_bounds() {
        assert_eq!(move_selection(0, 3, Direction::Up), 0);
        assert_eq!(move_selection(2, 3, Direction::Down), 2);
        assert_eq!(move_selection(0, 3, Direction::Down), 1);
        assert_eq!(move_selection(2, 3, Direction::Up), 1);
    }

    #[test]
    fn test_move_on_empty_list() {
        assert_eq!(move_selection(0, 0, Direction::Down), 0);
        assert_eq!(move_selection(0, 0, Direction::Up), 0);
    }

    #[test]
    fn test_move_from_stale_index() {
        // List shrank underneath the selection.
        assert_eq!(move_selection(10, 3, Direction::Up), 1);
        assert_eq!(move_selection(10, 3, Direction::Down), 2);
    }

    #[test]
    fn test_selected_item_clamps() {
        let items = list(3);
        assert_eq!(selected_item(&items, 1).unwrap().id, "1");
        assert_eq!(selected_item(&items, 99).unwrap().id, "2");
        assert!(selected_item(&[], 0).is_none());
    }
}
