//! Actions available for the selected item.

use quickbar_core::{ActionInfo, ActionKind, Item, ItemKind, Shortcut, StaticCommand};

fn pin_title(item: &Item) -> &'static str {
    if item.pinned {
        "Unpin"
    } else {
        "Pin"
    }
}

/// Actions for `item`, primary action first.
pub fn applicable_actions(item: &Item) -> Vec<ActionInfo> {
    match &item.kind {
        ItemKind::Snippet { .. } => vec![
            ActionInfo::new(ActionKind::Copy, "Copy to Clipboard", Some(Shortcut::enter())),
            ActionInfo::new(ActionKind::Paste, "Paste", Some(Shortcut::ctrl_enter())),
            ActionInfo::new(ActionKind::Edit, "Edit Snippet", Some(Shortcut::ctrl('e'))),
            ActionInfo::new(ActionKind::Duplicate, "Duplicate", Some(Shortcut::ctrl('d'))),
            ActionInfo::new(ActionKind::TogglePin, pin_title(item), Some(Shortcut::ctrl('p'))),
            ActionInfo::new(ActionKind::Delete, "Delete", None),
        ],
        ItemKind::Quicklink { .. } => vec![
            ActionInfo::new(ActionKind::OpenLink, "Open Link", Some(Shortcut::enter())),
            ActionInfo::new(ActionKind::CopyLink, "Copy Link", Some(Shortcut::ctrl('c'))),
            ActionInfo::new(ActionKind::Edit, "Edit Quicklink", Some(Shortcut::ctrl('e'))),
            ActionInfo::new(ActionKind::Duplicate, "Duplicate", Some(Shortcut::ctrl('d'))),
            ActionInfo::new(ActionKind::TogglePin, pin_title(item), Some(Shortcut::ctrl('p'))),
            ActionInfo::new(ActionKind::Delete, "Delete", None),
        ],
        ItemKind::ClipboardEntry { .. } => vec![
            ActionInfo::new(ActionKind::Paste, "Paste", Some(Shortcut::enter())),
            ActionInfo::new(ActionKind::Copy, "Copy to Clipboard", Some(Shortcut::ctrl('c'))),
            ActionInfo::new(ActionKind::TogglePin, pin_title(item), Some(Shortcut::ctrl('p'))),
            ActionInfo::new(ActionKind::Delete, "Delete", None),
        ],
        ItemKind::InstalledApp { .. } => {
            vec![ActionInfo::new(ActionKind::Launch, "Open Application", Some(Shortcut::enter()))]
        }
        ItemKind::StaticAction { command } => {
            let title = match command {
                StaticCommand::CreateSnippet => "Create Snippet",
                StaticCommand::CreateQuicklink => "Create Quicklink",
                StaticCommand::System { action } => action.label(),
            };
            vec![ActionInfo::new(ActionKind::Run, title, Some(Shortcut::enter()))]
        }
    }
}

/// The action bound to `shortcut` for this item, if any.
pub fn action_for_shortcut(item: &Item, shortcut: Shortcut) -> Option<ActionKind> {
    applicable_actions(item)
        .into_iter()
        .find(|a| a.shortcut == Some(shortcut))
        .map(|a| a.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbar_core::{SystemAction, APPLICATIONS, SNIPPETS, SYSTEM};

    fn snippet() -> Item {
        Item::new(
            "s1",
            "Sig",
            SNIPPETS,
            ItemKind::Snippet {
                body: "Regards".to_string(),
            },
        )
    }

    #[test]
    fn test_snippet_primary_is_copy() {
        let actions = applicable_actions(&snippet());
        assert_eq!(actions[0].kind, ActionKind::Copy);
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn test_pin_title_tracks_state() {
        let title = |item: &Item| {
            applicable_actions(item)
                .into_iter()
                .find(|a| a.kind == ActionKind::TogglePin)
                .unwrap()
                .title
        };
        assert_eq!(title(&snippet()), "Pin");
        assert_eq!(title(&snippet().pinned()), "Unpin");
    }

    #[test]
    fn test_shortcut_lookup() {
        let item = snippet();
        assert_eq!(
            action_for_shortcut(&item, Shortcut::ctrl_enter()),
            Some(ActionKind::Paste)
        );
        assert_eq!(action_for_shortcut(&item, Shortcut::ctrl('c')), None);

        let app = Item::new(
            "a1",
            "Term",
            APPLICATIONS,
            ItemKind::InstalledApp {
                launch_path: "/bin/term".to_string(),
            },
        );
        assert_eq!(
            action_for_shortcut(&app, Shortcut::enter()),
            Some(ActionKind::Launch)
        );
        assert_eq!(action_for_shortcut(&app, Shortcut::ctrl('p')), None);
    }

    #[test]
    fn test_system_action_title() {
        let item = Item::new(
            "sys",
            "Sleep",
            SYSTEM,
            ItemKind::StaticAction {
                command: StaticCommand::System {
                    action: SystemAction::Sleep,
                },
            },
        );
        let actions = applicable_actions(&item);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title, "Sleep");
        assert_eq!(actions[0].kind, ActionKind::Run);
    }
}
