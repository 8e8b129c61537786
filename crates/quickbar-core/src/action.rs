//! Action-related types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OS-level command forwarded to the native backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemAction {
    Lock,
    Sleep,
    Restart,
    Shutdown,
}

impl SystemAction {
    pub const ALL: [SystemAction; 4] = [
        SystemAction::Lock,
        SystemAction::Sleep,
        SystemAction::Restart,
        SystemAction::Shutdown,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SystemAction::Lock => "Lock Screen",
            SystemAction::Sleep => "Sleep",
            SystemAction::Restart => "Restart",
            SystemAction::Shutdown => "Shut Down",
        }
    }
}

/// Command behind a static (non user-data) item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StaticCommand {
    /// Open the snippet creation form.
    CreateSnippet,
    /// Open the quicklink creation form.
    CreateQuicklink,
    /// Forward a system action to the backend.
    System { action: SystemAction },
}

/// Something that can be done with the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Resolve the template and write it to the clipboard.
    Copy,
    /// Resolve the template and paste it into the focused app.
    Paste,
    /// Resolve the link template and open it.
    OpenLink,
    /// Resolve the link template and write it to the clipboard.
    CopyLink,
    Launch,
    Edit,
    Duplicate,
    TogglePin,
    Delete,
    /// Run a static command.
    Run,
}

/// Modifier + key shown next to an action and used by the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub ctrl: bool,
    pub key: ShortcutKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutKey {
    Enter,
    Char(char),
}

impl Shortcut {
    pub const fn enter() -> Self {
        Self {
            ctrl: false,
            key: ShortcutKey::Enter,
        }
    }

    pub const fn ctrl_enter() -> Self {
        Self {
            ctrl: true,
            key: ShortcutKey::Enter,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            key: ShortcutKey::Char(c),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        match self.key {
            ShortcutKey::Enter => f.write_str("Enter"),
            ShortcutKey::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

/// Information about an available action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    pub kind: ActionKind,

    /// Display text in the action list.
    pub title: String,

    /// Keyboard shortcut, if bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<Shortcut>,
}

impl ActionInfo {
    pub fn new(kind: ActionKind, title: impl Into<String>, shortcut: Option<Shortcut>) -> Self {
        Self {
            kind,
            title: title.into(),
            shortcut,
        }
    }
}

/// Change to the snippet/quicklink library requested by an action.
///
/// The executor never owns the library; it hands these back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LibraryMutation {
    Edit { id: String },
    Duplicate { id: String },
    TogglePin { id: String },
    Delete { id: String },
}

/// Result returned by action execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionOutcome {
    /// Resolved text was written to the clipboard.
    Copied { text: String },

    /// Resolved text was handed to the paste command.
    Pasted,

    /// A link or application was opened.
    Opened { target: String },

    /// A system action was forwarded.
    SystemRequested { action: SystemAction },

    /// The caller should apply a library change.
    Mutate { mutation: LibraryMutation },

    /// The action does not apply to this item.
    Unsupported,

    /// The backend call failed.
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_display() {
        assert_eq!(Shortcut::enter().to_string(), "Enter");
        assert_eq!(Shortcut::ctrl_enter().to_string(), "Ctrl+Enter");
        assert_eq!(Shortcut::ctrl('p').to_string(), "Ctrl+P");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ActionOutcome::Mutate {
            mutation: LibraryMutation::TogglePin {
                id: "s1".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "Mutate");
        assert_eq!(json["mutation"]["op"], "toggle_pin");
    }
}
