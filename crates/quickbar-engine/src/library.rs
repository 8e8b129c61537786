//! User library: snippets and quicklinks, plus the clipboard history list.
//!
//! The library is persisted as one JSON document. Ids come from the injected
//! [`IdGenerator`] so tests stay deterministic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use quickbar_core::{ClipboardEntry, LibraryMutation, Quicklink, Snippet, StoreError};
use serde::{Deserialize, Serialize};

use crate::ports::IdGenerator;

/// Fields of a snippet the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub name: String,
    pub icon: String,
    pub keyword: String,
    pub body: String,
    pub tags: Vec<String>,
    pub pinned: bool,
}

/// Fields of a quicklink the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuicklinkDraft {
    pub name: String,
    pub icon: String,
    pub link: String,
    pub tags: Vec<String>,
    pub pinned: bool,
}

/// Snippets and quicklinks in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub quicklinks: Vec<Quicklink>,
}

impl Library {
    /// Create a new empty library.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Snippets
    // =========================================================================

    /// Append a snippet with a fresh id and return it.
    pub fn add_snippet(&mut self, draft: SnippetDraft, ids: &dyn IdGenerator) -> &Snippet {
        let index = self.snippets.len();
        self.snippets.push(Snippet {
            id: ids.generate_id(),
            name: draft.name,
            icon: draft.icon,
            keyword: draft.keyword,
            body: draft.body,
            tags: draft.tags,
            pinned: draft.pinned,
        });
        &self.snippets[index]
    }

    pub fn update_snippet(&mut self, id: &str, draft: SnippetDraft) -> Result<(), StoreError> {
        let snippet = self.snippet_mut(id)?;
        snippet.name = draft.name;
        snippet.icon = draft.icon;
        snippet.keyword = draft.keyword;
        snippet.body = draft.body;
        snippet.tags = draft.tags;
        snippet.pinned = draft.pinned;
        Ok(())
    }

    /// Append a copy with " (copy)" on the name and "-copy" on the keyword.
    pub fn duplicate_snippet(
        &mut self,
        id: &str,
        ids: &dyn IdGenerator,
    ) -> Result<&Snippet, StoreError> {
        let original = self
            .snippets
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let copy = Snippet {
            id: ids.generate_id(),
            name: format!("{} (copy)", original.name),
            keyword: format!("{}-copy", original.keyword),
            ..original.clone()
        };
        self.snippets.push(copy);
        Ok(&self.snippets[self.snippets.len() - 1])
    }

    fn snippet_mut(&mut self, id: &str) -> Result<&mut Snippet, StoreError> {
        self.snippets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    // =========================================================================
    // Quicklinks
    // =========================================================================

    /// Append a quicklink with a fresh id and return it.
    pub fn add_quicklink(&mut self, draft: QuicklinkDraft, ids: &dyn IdGenerator) -> &Quicklink {
        let index = self.quicklinks.len();
        self.quicklinks.push(Quicklink {
            id: ids.generate_id(),
            name: draft.name,
            icon: draft.icon,
            link: draft.link,
            tags: draft.tags,
            pinned: draft.pinned,
        });
        &self.quicklinks[index]
    }

    pub fn update_quicklink(&mut self, id: &str, draft: QuicklinkDraft) -> Result<(), StoreError> {
        let quicklink = self.quicklink_mut(id)?;
        quicklink.name = draft.name;
        quicklink.icon = draft.icon;
        quicklink.link = draft.link;
        quicklink.tags = draft.tags;
        quicklink.pinned = draft.pinned;
        Ok(())
    }

    /// Append a copy with " (copy)" on the name.
    pub fn duplicate_quicklink(
        &mut self,
        id: &str,
        ids: &dyn IdGenerator,
    ) -> Result<&Quicklink, StoreError> {
        let original = self
            .quicklinks
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let copy = Quicklink {
            id: ids.generate_id(),
            name: format!("{} (copy)", original.name),
            ..original.clone()
        };
        self.quicklinks.push(copy);
        Ok(&self.quicklinks[self.quicklinks.len() - 1])
    }

    fn quicklink_mut(&mut self, id: &str) -> Result<&mut Quicklink, StoreError> {
        self.quicklinks
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    // =========================================================================
    // Shared
    // =========================================================================

    /// Flip the pinned flag of the snippet or quicklink with this id.
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, StoreError> {
        if let Ok(snippet) = self.snippet_mut(id) {
            snippet.pinned = !snippet.pinned;
            return Ok(snippet.pinned);
        }
        let quicklink = self.quicklink_mut(id)?;
        quicklink.pinned = !quicklink.pinned;
        Ok(quicklink.pinned)
    }

    /// Remove the snippet or quicklink with this id.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.snippets.len() + self.quicklinks.len();
        self.snippets.retain(|s| s.id != id);
        self.quicklinks.retain(|q| q.id != id);
        if self.snippets.len() + self.quicklinks.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Duplicate whichever record has this id.
    pub fn duplicate(&mut self, id: &str, ids: &dyn IdGenerator) -> Result<(), StoreError> {
        if self.snippets.iter().any(|s| s.id == id) {
            self.duplicate_snippet(id, ids).map(|_| ())
        } else {
            self.duplicate_quicklink(id, ids).map(|_| ())
        }
    }

    /// Apply a mutation produced by the action executor.
    ///
    /// Edit needs a form and is left to the caller; it returns `Ok(false)`.
    pub fn apply(
        &mut self,
        mutation: &LibraryMutation,
        ids: &dyn IdGenerator,
    ) -> Result<bool, StoreError> {
        match mutation {
            LibraryMutation::TogglePin { id } => self.toggle_pin(id).map(|_| true),
            LibraryMutation::Delete { id } => self.delete(id).map(|()| true),
            LibraryMutation::Duplicate { id } => self.duplicate(id, ids).map(|()| true),
            LibraryMutation::Edit { .. } => Ok(false),
        }
    }

    /// Keyword → body map for the text-expansion backend.
    ///
    /// Snippets with an empty keyword or body are skipped; a later snippet
    /// wins a keyword clash.
    pub fn triggers(&self) -> HashMap<String, String> {
        self.snippets
            .iter()
            .filter(|s| !s.keyword.is_empty() && !s.body.is_empty())
            .map(|s| (s.keyword.clone(), s.body.clone()))
            .collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load from `path`. A missing file is an empty library.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let library: Library = serde_json::from_str(&raw)?;
                tracing::info!(
                    "Loaded library from {}: {} snippets, {} quicklinks",
                    path.display(),
                    library.snippets.len(),
                    library.quicklinks.len()
                );
                Ok(library)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No library at {}, starting empty", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Saved library to {}", path.display());
        Ok(())
    }
}

/// Default library location.
pub fn library_path() -> Result<PathBuf, StoreError> {
    dirs::config_dir()
        .map(|p| p.join("quickbar").join("library.json"))
        .ok_or(StoreError::NoDataDir)
}

// =============================================================================
// Clipboard History
// =============================================================================

/// Clipboard entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardHistory {
    entries: Vec<ClipboardEntry>,
}

impl ClipboardHistory {
    pub fn new(entries: Vec<ClipboardEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// Record a newly captured entry at the top.
    pub fn push(&mut self, entry: ClipboardEntry) {
        self.entries.insert(0, entry);
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.pinned = !entry.pinned;
        Ok(entry.pinned)
    }

    /// Apply a pin or delete produced for a clipboard entry.
    ///
    /// Other mutations only concern the library and return `Ok(false)`.
    pub fn apply(&mut self, mutation: &LibraryMutation) -> Result<bool, StoreError> {
        match mutation {
            LibraryMutation::TogglePin { id } => self.toggle_pin(id).map(|_| true),
            LibraryMutation::Delete { id } => self.delete(id).map(|()| true),
            LibraryMutation::Edit { .. } | LibraryMutation::Duplicate { .. } => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockIdGenerator;

    fn sequential_ids() -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        let mut n = 0;
        ids.expect_generate_id().returning(move || {
            n += 1;
            format!("id{n}")
        });
        ids
    }

    fn snippet_draft(name: &str, keyword: &str) -> SnippetDraft {
        SnippetDraft {
            name: name.to_string(),
            icon: "Code".to_string(),
            keyword: keyword.to_string(),
            body: format!("{name} body"),
            ..Default::default()
        }
    }

    fn quicklink_draft(name: &str) -> QuicklinkDraft {
        QuicklinkDraft {
            name: name.to_string(),
            icon: "Globe".to_string(),
            link: "https://example.com/?q={clipboard}".to_string(),
            ..Default::default()
        }
    }

    fn entry(id: &str) -> ClipboardEntry {
        ClipboardEntry {
            id: id.to_string(),
            content: id.to_string(),
            content_type: Default::default(),
            source_app: String::new(),
            word_count: 1,
            char_count: id.len(),
            timestamp: 0,
            pinned: false,
            preview: id.to_string(),
        }
    }

    #[test]
    fn test_add_assigns_ids() {
        let ids = sequential_ids();
        let mut library = Library::new();
        assert_eq!(library.add_snippet(snippet_draft("Sig", ";sig"), &ids).id, "id1");
        assert_eq!(library.add_quicklink(quicklink_draft("Search"), &ids).id, "id2");
    }

    #[test]
    fn test_duplicate_snippet() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);

        library.duplicate("id1", &ids).unwrap();
        let copy = &library.snippets[1];
        assert_eq!(copy.id, "id2");
        assert_eq!(copy.name, "Sig (copy)");
        assert_eq!(copy.keyword, ";sig-copy");
        assert_eq!(copy.body, "Sig body");
    }

    #[test]
    fn test_duplicate_quicklink() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_quicklink(quicklink_draft("Search"), &ids);

        library.duplicate("id1", &ids).unwrap();
        assert_eq!(library.quicklinks[1].name, "Search (copy)");
        assert_eq!(library.quicklinks[1].link, library.quicklinks[0].link);
    }

    #[test]
    fn test_toggle_pin_and_delete() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);
        library.add_quicklink(quicklink_draft("Search"), &ids);

        assert!(library.toggle_pin("id2").unwrap());
        assert!(!library.toggle_pin("id2").unwrap());

        library.delete("id1").unwrap();
        assert!(library.snippets.is_empty());
        assert!(matches!(library.delete("id1"), Err(StoreError::NotFound(_))));
        assert!(matches!(library.toggle_pin("nope"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_update_snippet() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);

        library
            .update_snippet("id1", snippet_draft("Signature", ";sg"))
            .unwrap();
        assert_eq!(library.snippets[0].name, "Signature");
        assert_eq!(library.snippets[0].id, "id1");
        assert!(library.update_snippet("x", SnippetDraft::default()).is_err());
    }

    #[test]
    fn test_apply_mutations() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);

        let pin = LibraryMutation::TogglePin {
            id: "id1".to_string(),
        };
        assert!(library.apply(&pin, &ids).unwrap());
        assert!(library.snippets[0].pinned);

        let edit = LibraryMutation::Edit {
            id: "id1".to_string(),
        };
        assert!(!library.apply(&edit, &ids).unwrap());
    }

    #[test]
    fn test_update_quicklink() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_quicklink(quicklink_draft("Search"), &ids);

        let mut draft = quicklink_draft("Docs");
        draft.link = "https://docs.rs/{clipboard}".to_string();
        draft.pinned = true;
        library.update_quicklink("id1", draft).unwrap();

        let quicklink = &library.quicklinks[0];
        assert_eq!(quicklink.id, "id1");
        assert_eq!(quicklink.name, "Docs");
        assert_eq!(quicklink.link, "https://docs.rs/{clipboard}");
        assert!(quicklink.pinned);
        assert!(matches!(
            library.update_quicklink("x", QuicklinkDraft::default()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_triggers_skip_incomplete() {
        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);
        library.add_snippet(snippet_draft("No keyword", ""), &ids);
        let mut empty_body = snippet_draft("Empty", ";e");
        empty_body.body.clear();
        library.add_snippet(empty_body, &ids);

        let triggers = library.triggers();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[";sig"], "Sig body");
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quickbar").join("library.json");

        assert_eq!(Library::load_from(&path).unwrap(), Library::new());

        let ids = sequential_ids();
        let mut library = Library::new();
        library.add_snippet(snippet_draft("Sig", ";sig"), &ids);
        library.add_quicklink(quicklink_draft("Search"), &ids);
        library.save_to(&path).unwrap();

        assert_eq!(Library::load_from(&path).unwrap(), library);
    }

    #[test]
    fn test_corrupt_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "[").unwrap();
        assert!(matches!(Library::load_from(&path), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_clipboard_history() {
        let mut history = ClipboardHistory::default();
        history.push(entry("old"));
        history.push(entry("new"));
        assert_eq!(history.entries()[0].id, "new");

        assert!(history.toggle_pin("old").unwrap());
        history.delete("new").unwrap();
        assert_eq!(history.entries().len(), 1);
        assert!(history.delete("new").is_err());

        history.clear();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_clipboard_history_apply() {
        let mut history = ClipboardHistory::new(vec![entry("a"), entry("b")]);

        let pin = LibraryMutation::TogglePin {
            id: "b".to_string(),
        };
        assert!(history.apply(&pin).unwrap());
        assert!(history.entries()[1].pinned);

        let delete = LibraryMutation::Delete {
            id: "a".to_string(),
        };
        assert!(history.apply(&delete).unwrap());
        assert_eq!(history.entries().len(), 1);

        let duplicate = LibraryMutation::Duplicate {
            id: "b".to_string(),
        };
        assert!(!history.apply(&duplicate).unwrap());
        assert!(matches!(history.apply(&delete), Err(StoreError::NotFound(_))));
    }
}
