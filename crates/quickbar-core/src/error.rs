//! Error types for the quickbar command palette.

use thiserror::Error;

/// Failures reported by the capability ports (clipboard, command sinks).
///
/// These are never fatal to the engine; callers log and degrade.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortError {
    /// Clipboard could not be read.
    #[error("Clipboard read failed: {0}")]
    ClipboardRead(String),

    /// Clipboard could not be written.
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),

    /// A backend command returned an error.
    #[error("Command '{command}' failed: {message}")]
    Command { command: String, message: String },

    /// The backend does not implement this command.
    #[error("Command '{0}' is not supported")]
    Unsupported(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid hotkey format.
    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),
}

/// Library persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No data directory found.
    #[error("Data directory not found")]
    NoDataDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored library is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No record with this id.
    #[error("No record with id '{0}'")]
    NotFound(String),
}
