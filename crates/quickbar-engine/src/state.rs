//! Palette UI state and its transitions.
//!
//! The state is a plain value. `PaletteState::apply` takes it by value and
//! returns the next state, so the caller owns it and nothing is global.

use crate::selection::{clamp_index, move_selection, Direction};

/// Which list the palette is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Menu {
    /// Snippets, quicklinks, system actions and the create entries.
    #[default]
    Root,
    /// Clipboard history submenu.
    Clipboard,
    /// Installed applications submenu.
    Applications,
}

/// A form or panel covering the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    CreateSnippet,
    CreateQuicklink,
    EditSnippet { id: String },
    EditQuicklink { id: String },
    Settings,
}

/// Input to [`PaletteState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// The search text changed.
    QueryChanged(String),
    /// Arrow key.
    Move(Direction),
    /// Pointer hover or click on a row.
    Select(usize),
    /// Close any form, clear the query, reset the selection.
    Escape,
    /// Open a submenu.
    EnterMenu(Menu),
    /// Return to the root menu.
    LeaveMenu,
    OpenForm(Form),
    CloseForm,
}

/// Ephemeral palette state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub menu: Menu,
    pub query: String,
    /// Index into the flattened list.
    pub selected: usize,
    pub form: Option<Form>,
}

impl PaletteState {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.selected = 0;
        self
    }

    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = menu;
        self
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Compute the next state.
    ///
    /// `len` is the length of the flattened list the selection refers to.
    pub fn apply(self, event: PaletteEvent, len: usize) -> Self {
        match event {
            PaletteEvent::QueryChanged(query) => self.with_query(query),
            PaletteEvent::Move(direction) => Self {
                selected: move_selection(self.selected, len, direction),
                ..self
            },
            PaletteEvent::Select(index) => Self {
                selected: clamp_index(index, len),
                ..self
            },
            PaletteEvent::Escape => Self {
                form: None,
                query: String::new(),
                selected: 0,
                ..self
            },
            PaletteEvent::EnterMenu(menu) => Self {
                menu,
                query: String::new(),
                selected: 0,
                form: None,
            },
            PaletteEvent::LeaveMenu => Self {
                menu: Menu::Root,
                query: String::new(),
                selected: 0,
                form: None,
            },
            PaletteEvent::OpenForm(form) => Self {
                form: Some(form),
                ..self
            },
            PaletteEvent::CloseForm => Self { form: None, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_resets_selection() {
        let state = PaletteState {
            selected: 3,
            ..Default::default()
        };
        let next = state.apply(PaletteEvent::QueryChanged("sig".to_string()), 5);
        assert_eq!(next.query, "sig");
        assert_eq!(next.selected, 0);
    }

    #[test]
    fn test_move_clamps() {
        let state = PaletteState::default();
        let state = state.apply(PaletteEvent::Move(Direction::Up), 3);
        assert_eq!(state.selected, 0);

        let state = state
            .apply(PaletteEvent::Move(Direction::Down), 3)
            .apply(PaletteEvent::Move(Direction::Down), 3)
            .apply(PaletteEvent::Move(Direction::Down), 3);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_select_clamps() {
        let state = PaletteState::default().apply(PaletteEvent::Select(10), 4);
        assert_eq!(state.selected, 3);
        let state = state.apply(PaletteEvent::Select(10), 0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_escape_clears_everything_but_menu() {
        let state = PaletteState {
            menu: Menu::Clipboard,
            query: "abc".to_string(),
            selected: 2,
            form: Some(Form::Settings),
        };
        let next = state.apply(PaletteEvent::Escape, 5);
        assert_eq!(next.menu, Menu::Clipboard);
        assert!(next.query.is_empty());
        assert_eq!(next.selected, 0);
        assert!(!next.is_form_open());
    }

    #[test]
    fn test_menu_navigation_resets() {
        let state = PaletteState::default()
            .with_query("term")
            .apply(PaletteEvent::Select(1), 4)
            .apply(PaletteEvent::EnterMenu(Menu::Applications), 4);
        assert_eq!(state.menu, Menu::Applications);
        assert!(state.query.is_empty());
        assert_eq!(state.selected, 0);

        let state = state
            .apply(PaletteEvent::QueryChanged("x".to_string()), 4)
            .apply(PaletteEvent::LeaveMenu, 4);
        assert_eq!(state, PaletteState::default());
    }

    #[test]
    fn test_forms() {
        let state = PaletteState::default().apply(
            PaletteEvent::OpenForm(Form::EditSnippet {
                id: "s1".to_string(),
            }),
            0,
        );
        assert!(state.is_form_open());
        let state = state.apply(PaletteEvent::CloseForm, 0);
        assert!(!state.is_form_open());
    }
}
