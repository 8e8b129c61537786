//! Command palette list engine for quickbar.
//!
//! This crate turns the user's snippets, quicklinks, clipboard history and
//! installed applications into one searchable, grouped, keyboard-navigable
//! list:
//! - Case-insensitive substring filtering
//! - Category grouping with `Pinned` first and `Actions` last
//! - Flattening and clamped selection
//! - Placeholder resolution for snippet and quicklink templates
//! - Explicit palette state with pure transitions
//! - Keymap and action execution over injected backend ports
//! - Library store with JSON persistence

pub mod actions;
pub mod catalog;
pub mod executor;
pub mod filter;
pub mod group;
pub mod keymap;
pub mod library;
pub mod placeholder;
pub mod ports;
pub mod selection;
pub mod state;


// Re-export commonly used types
pub use actions::{action_for_shortcut, applicable_actions};
pub use catalog::{Catalog, PaletteView};
pub use executor::ActionExecutor;
pub use filter::filter;
pub use group::{flatten, group, ListEntry};
pub use keymap::{intent_for, Intent, Key, KeyPress};
pub use library::{library_path, ClipboardHistory, Library, QuicklinkDraft, SnippetDraft};
pub use placeholder::{resolve_async, resolve_async_at, resolve_sync, resolve_sync_at};
pub use ports::{Clipboard, CommandSink, IdGenerator, UuidGenerator};
pub use selection::{move_selection, selected_item, Direction};
pub use state::{Form, Menu, PaletteEvent, PaletteState};

// Re-export quickbar_core types for convenience
pub use quickbar_core::{ActionInfo, ActionKind, ActionOutcome, Group, Groups, Item, ItemKind};
