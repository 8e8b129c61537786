//! Key press → palette intent.
//!
//! ```text
//! KeyPress ──► Escape / arrows ──────────────► Intent::Event
//!          ──► Ctrl+N / Ctrl+L (no form) ────► Intent::Event(OpenForm)
//!          ──► Enter on a create row ────────► Intent::Event(OpenForm)
//!          ──► anything else (no form) ──────► selected item's shortcut ──► Intent::Run
//! ```

use quickbar_core::{ActionKind, Item, ItemKind, Shortcut, ShortcutKey, StaticCommand};

use crate::actions::action_for_shortcut;
use crate::selection::Direction;
use crate::state::{Form, PaletteEvent};

/// A physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
}

/// A key with its Ctrl state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    fn as_shortcut(self) -> Option<Shortcut> {
        let key = match self.key {
            Key::Enter => ShortcutKey::Enter,
            Key::Char(c) => ShortcutKey::Char(c.to_ascii_lowercase()),
            Key::Up | Key::Down | Key::Escape => return None,
        };
        Some(Shortcut {
            ctrl: self.ctrl,
            key,
        })
    }
}

/// What a key press should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Feed this event to the palette state.
    Event(PaletteEvent),
    /// Execute an action on the selected item.
    Run(ActionKind),
}

/// Resolve a key press. `None` means the key is not bound here.
///
/// While a form is open only Escape and the arrows are handled.
pub fn intent_for(press: KeyPress, selected: Option<&Item>, form_open: bool) -> Option<Intent> {
    match press.key {
        Key::Escape => return Some(Intent::Event(PaletteEvent::Escape)),
        Key::Up => return Some(Intent::Event(PaletteEvent::Move(Direction::Up))),
        Key::Down => return Some(Intent::Event(PaletteEvent::Move(Direction::Down))),
        _ => {}
    }

    if form_open {
        return None;
    }

    if press.ctrl {
        match press.key {
            Key::Char('n') | Key::Char('N') => {
                return Some(Intent::Event(PaletteEvent::OpenForm(Form::CreateSnippet)))
            }
            Key::Char('l') | Key::Char('L') => {
                return Some(Intent::Event(PaletteEvent::OpenForm(Form::CreateQuicklink)))
            }
            _ => {}
        }
    }

    let selected = selected?;
    if press.key == Key::Enter && !press.ctrl {
        if let Some(form) = create_form(selected) {
            return Some(Intent::Event(PaletteEvent::OpenForm(form)));
        }
    }

    let shortcut = press.as_shortcut()?;
    action_for_shortcut(selected, shortcut).map(Intent::Run)
}

/// Form opened by the "Create ..." rows of the Actions group.
fn create_form(item: &Item) -> Option<Form> {
    match item.kind {
        ItemKind::StaticAction {
            command: StaticCommand::CreateSnippet,
        } => Some(Form::CreateSnippet),
        ItemKind::StaticAction {
            command: StaticCommand::CreateQuicklink,
        } => Some(Form::CreateQuicklink),
        _ => None,
    }
}
