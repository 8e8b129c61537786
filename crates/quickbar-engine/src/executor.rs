//! Executing actions against the injected ports.
//!
//! Backend failures never propagate: they are logged and reported as
//! `ActionOutcome::Failed` so the UI can show feedback and carry on.

use std::sync::Arc;

use quickbar_core::{
    ActionKind, ActionOutcome, Item, ItemKind, LibraryMutation, PortError, StaticCommand,
};

use crate::placeholder::resolve_async;
use crate::ports::{Clipboard, CommandSink, IdGenerator};

/// Runs actions for the selected item.
pub struct ActionExecutor {
    clipboard: Arc<dyn Clipboard>,
    ids: Arc<dyn IdGenerator>,
    commands: Arc<dyn CommandSink>,
}

impl ActionExecutor {
    /// Create a new executor over the given ports.
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        ids: Arc<dyn IdGenerator>,
        commands: Arc<dyn CommandSink>,
    ) -> Self {
        Self {
            clipboard,
            ids,
            commands,
        }
    }

    /// Resolve all placeholders in `template`.
    pub async fn resolve(&self, template: &str) -> String {
        resolve_async(template, self.clipboard.as_ref(), self.ids.as_ref()).await
    }

    /// Text an item contributes to copy/paste.
    ///
    /// Snippet and quicklink templates are resolved; clipboard history is
    /// replayed verbatim.
    async fn text_for(&self, item: &Item) -> Option<String> {
        match &item.kind {
            ItemKind::Snippet { body } => Some(self.resolve(body).await),
            ItemKind::Quicklink { link } => Some(self.resolve(link).await),
            ItemKind::ClipboardEntry { content } => Some(content.clone()),
            ItemKind::InstalledApp { .. } | ItemKind::StaticAction { .. } => None,
        }
    }

    /// Execute `action` on `item`.
    pub async fn execute(&self, action: ActionKind, item: &Item) -> ActionOutcome {
        tracing::debug!("Executing {:?} on '{}' ({})", action, item.id, item.kind.name());

        let result = match (action, &item.kind) {
            (ActionKind::Copy, _) | (ActionKind::CopyLink, ItemKind::Quicklink { .. }) => {
                match self.text_for(item).await {
                    Some(text) => self
                        .clipboard
                        .write_text(text.clone())
                        .await
                        .map(|()| ActionOutcome::Copied { text }),
                    None => Ok(ActionOutcome::Unsupported),
                }
            }
            (ActionKind::Paste, ItemKind::Snippet { .. } | ItemKind::ClipboardEntry { .. }) => {
                match self.text_for(item).await {
                    Some(text) => self.commands.paste(text).await.map(|()| ActionOutcome::Pasted),
                    None => Ok(ActionOutcome::Unsupported),
                }
            }
            (ActionKind::OpenLink, ItemKind::Quicklink { link }) => {
                let url = self.resolve(link).await;
                self.commands
                    .open_link(url.clone())
                    .await
                    .map(|()| ActionOutcome::Opened { target: url })
            }
            (ActionKind::Launch, ItemKind::InstalledApp { launch_path }) => {
                self.launch(launch_path).await
            }
            (ActionKind::Run, ItemKind::StaticAction { command }) => self.run(*command).await,
            (
                ActionKind::Edit | ActionKind::Duplicate,
                ItemKind::Snippet { .. } | ItemKind::Quicklink { .. },
            )
            | (
                ActionKind::TogglePin | ActionKind::Delete,
                ItemKind::Snippet { .. }
                | ItemKind::Quicklink { .. }
                | ItemKind::ClipboardEntry { .. },
            ) => Ok(ActionOutcome::Mutate {
                mutation: mutation_for(action, &item.id),
            }),
            _ => Ok(ActionOutcome::Unsupported),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Action {:?} on '{}' failed: {}", action, item.id, e);
            ActionOutcome::Failed {
                error: e.to_string(),
            }
        })
    }

    async fn launch(&self, launch_path: &str) -> Result<ActionOutcome, PortError> {
        if launch_path.trim().is_empty() {
            return Err(PortError::Command {
                command: "launch_app".to_string(),
                message: "Missing application path".to_string(),
            });
        }
        self.commands
            .launch_app(launch_path.to_string())
            .await
            .map(|()| ActionOutcome::Opened {
                target: launch_path.to_string(),
            })
    }

    /// Create commands open a form through the keymap and never reach here.
    async fn run(&self, command: StaticCommand) -> Result<ActionOutcome, PortError> {
        match command {
            StaticCommand::CreateSnippet | StaticCommand::CreateQuicklink => {
                Ok(ActionOutcome::Unsupported)
            }
            StaticCommand::System { action } => self
                .commands
                .system_action(action)
                .await
                .map(|()| ActionOutcome::SystemRequested { action }),
        }
    }
}

fn mutation_for(action: ActionKind, id: &str) -> LibraryMutation {
    let id = id.to_string();
    match action {
        ActionKind::Edit => LibraryMutation::Edit { id },
        ActionKind::Duplicate => LibraryMutation::Duplicate { id },
        ActionKind::TogglePin => LibraryMutation::TogglePin { id },
        _ => LibraryMutation::Delete { id },
    }
}
