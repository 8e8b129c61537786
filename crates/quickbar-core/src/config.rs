//! Configuration types.
//!
//! Preferences live in `preferences.json` under the quickbar config
//! directory. Every field has a default, so partial files load fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hotkey configuration
    #[serde(default)]
    pub hotkey: HotkeyConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Global toggle hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Modifier names, e.g. ["ctrl", "shift"].
    pub modifiers: Vec<String>,

    /// Key name, e.g. "space".
    pub key: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            modifiers: vec!["ctrl".to_string(), "shift".to_string()],
            key: "space".to_string(),
        }
    }
}

const MODIFIERS: [&str; 7] = ["ctrl", "control", "alt", "shift", "meta", "super", "cmd"];

impl HotkeyConfig {
    /// Parse a hotkey string like "ctrl+shift+space".
    ///
    /// The last segment is the key; every other segment must be a modifier.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let parts: Vec<String> = s
            .split('+')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        let Some((key, modifiers)) = parts.split_last() else {
            return Err(ConfigError::InvalidHotkey(s.to_string()));
        };

        if MODIFIERS.contains(&key.as_str()) {
            return Err(ConfigError::InvalidHotkey(s.to_string()));
        }
        if let Some(bad) = modifiers.iter().find(|m| !MODIFIERS.contains(&m.as_str())) {
            return Err(ConfigError::InvalidHotkey(format!(
                "{s} (unknown modifier '{bad}')"
            )));
        }

        Ok(Self {
            modifiers: modifiers.to_vec(),
            key: key.clone(),
        })
    }
}

impl std::fmt::Display for HotkeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.modifiers {
            write!(f, "{m}+")?;
        }
        f.write_str(&self.key)
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Backdrop blur radius in pixels.
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f64,

    /// Glass background opacity, 0-100.
    #[serde(default = "default_glass_opacity")]
    pub glass_opacity: f64,

    #[serde(default)]
    pub always_on_top: bool,
}

fn default_blur_radius() -> f64 {
    20.0
}

fn default_glass_opacity() -> f64 {
    80.0
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            blur_radius: default_blur_radius(),
            glass_opacity: default_glass_opacity(),
            always_on_top: false,
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("quickbar"))
}

/// Get the path to preferences.json.
pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("preferences.json"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Load preferences from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write preferences to `path`, creating parent directories.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

/// Load preferences from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = preferences_path().ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Save preferences to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = preferences_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(&path, config)
}
