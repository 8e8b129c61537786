//! Records supplied by the stores and the native backend.
//!
//! Field names follow the wire shapes the collaborators already use, so these
//! deserialize straight from their JSON.

use serde::{Deserialize, Serialize};

/// User-defined keyword-triggered text template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub name: String,
    /// Icon key (default "Code").
    #[serde(default = "default_snippet_icon")]
    pub icon: String,
    pub keyword: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}

fn default_snippet_icon() -> String {
    "Code".to_string()
}

/// User-defined named URL/deeplink template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quicklink {
    pub id: String,
    pub name: String,
    /// Icon key (default "Globe").
    #[serde(default = "default_quicklink_icon")]
    pub icon: String,
    /// URL, deeplink, or file path.
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}

fn default_quicklink_icon() -> String {
    "Globe".to_string()
}

/// Kind of content detected in a clipboard entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Link,
    Email,
    Phone,
    Code,
    Path,
    Number,
    Json,
    Color,
    Image,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Link => "link",
            ContentType::Email => "email",
            ContentType::Phone => "phone",
            ContentType::Code => "code",
            ContentType::Path => "path",
            ContentType::Number => "number",
            ContentType::Json => "json",
            ContentType::Color => "color",
            ContentType::Image => "image",
        }
    }
}

/// A single clipboard history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardEntry {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub source_app: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub char_count: usize,
    /// Capture time in milliseconds since the epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub pinned: bool,
    /// Truncated content for list display.
    #[serde(default)]
    pub preview: String,
}

/// An application found by the backend's app discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    pub id: String,
    pub name: String,
    pub launch_path: String,
    #[serde(default)]
    pub location: Option<String>,
    pub source: String,
}
