//! OS-backed ports for the command-line front-end.

use async_trait::async_trait;
use parking_lot::Mutex;
use quickbar_core::{PortError, SystemAction};
use quickbar_engine::{Clipboard, CommandSink};

/// System clipboard via arboard.
///
/// The handle is opened lazily; some platforms refuse it without a display.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_handle<T>(
        &self,
        on_error: fn(String) -> PortError,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, PortError> {
        let mut guard = self.inner.lock();
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().map_err(|e| on_error(e.to_string()))?);
        }
        match guard.as_mut() {
            Some(handle) => f(handle).map_err(|e| on_error(e.to_string())),
            None => Err(on_error("clipboard unavailable".to_string())),
        }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn read_text(&self) -> Result<String, PortError> {
        self.with_handle(PortError::ClipboardRead, |c| c.get_text())
    }

    async fn write_text(&self, text: String) -> Result<(), PortError> {
        self.with_handle(PortError::ClipboardWrite, |c| c.set_text(text))
    }
}

/// Opens links and apps with the desktop's default handler.
///
/// There is no key injection here, so paste leaves the text on the clipboard
/// for the user to paste.
pub struct DesktopCommands {
    clipboard: std::sync::Arc<SystemClipboard>,
}

impl DesktopCommands {
    pub fn new(clipboard: std::sync::Arc<SystemClipboard>) -> Self {
        Self { clipboard }
    }
}

fn command_error(command: &str, e: impl std::fmt::Display) -> PortError {
    PortError::Command {
        command: command.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl CommandSink for DesktopCommands {
    async fn paste(&self, text: String) -> Result<(), PortError> {
        self.clipboard.write_text(text).await?;
        tracing::info!("Text placed on the clipboard; paste it with your system shortcut");
        Ok(())
    }

    async fn open_link(&self, url: String) -> Result<(), PortError> {
        open::that(&url).map_err(|e| command_error("open_link", e))
    }

    async fn launch_app(&self, launch_path: String) -> Result<(), PortError> {
        open::that(&launch_path).map_err(|e| command_error("launch_app", e))
    }

    async fn system_action(&self, action: SystemAction) -> Result<(), PortError> {
        Err(PortError::Unsupported(format!("system_action:{action:?}")))
    }
}
