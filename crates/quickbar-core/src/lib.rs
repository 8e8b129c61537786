//! Core types for the quickbar command palette.
//!
//! This crate contains shared data structures used across all quickbar crates:
//! - Item and Group types for the palette list
//! - Records supplied by the stores and backend
//! - Actions and action outcomes
//! - Configuration types
//! - Error types

mod action;
mod config;
mod error;
mod item;
mod records;

pub use action::{
    ActionInfo, ActionKind, ActionOutcome, LibraryMutation, Shortcut, ShortcutKey, StaticCommand,
    SystemAction,
};
pub use config::{
    config_dir, ensure_config_dir, load_config, load_config_from, preferences_path, save_config,
    save_config_to, AppConfig, AppearanceConfig, HotkeyConfig,
};
pub use error::{ConfigError, PortError, StoreError};
pub use item::{
    Group, Groups, Item, ItemKind, ACTIONS, APPLICATIONS, CLIPBOARD_HISTORY, PINNED,
    QUICKLINKS, SNIPPETS, SYSTEM,
};
pub use records::{ClipboardEntry, ContentType, InstalledApp, Quicklink, Snippet};
