//! Capability ports onto the native backend.
//!
//! The engine never talks to the OS directly. Clipboard access, id
//! generation and fire-and-forget commands are injected through these traits
//! so everything above them can be tested with mocks.

use async_trait::async_trait;
use quickbar_core::{PortError, SystemAction};

/// Read/write access to the system clipboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Take one snapshot of the clipboard's text.
    async fn read_text(&self) -> Result<String, PortError>;

    /// Replace the clipboard's text.
    async fn write_text(&self, text: String) -> Result<(), PortError>;
}

/// Source of unique identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Fire-and-forget commands handled by the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Paste already-resolved text into the previously focused app.
    async fn paste(&self, text: String) -> Result<(), PortError>;

    /// Open a URL, deeplink or file path.
    async fn open_link(&self, url: String) -> Result<(), PortError>;

    /// Launch an installed application.
    async fn launch_app(&self, launch_path: String) -> Result<(), PortError>;

    /// Lock, sleep, restart or shut down.
    async fn system_action(&self, action: SystemAction) -> Result<(), PortError>;
}
