//! User-configurable settings and their persistence.

use crate::host::SettingsBackend;
use selkie_themes::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// The persisted record. Wire form is a flat camelCase JSON object
/// (`{"theme": ..., "transparent": ..., "size": ..., "showBox": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Theme slug; resolved against the theme table at render time.
    pub theme: String,
    /// Render diagrams with a transparent background.
    pub transparent: bool,
    /// Diagram size as a percentage of the container width.
    pub size: u32,
    /// Draw a border box around the diagram.
    pub show_box: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            transparent: false,
            size: 60,
            show_box: false,
        }
    }
}

impl Settings {
    /// Merges a persisted partial blob over the defaults, shallow and
    /// per-field: a present, well-typed field is taken as-is (no range or
    /// theme-name validation — the render path handles unknown themes), a
    /// missing or wrong-typed field keeps its default. Never fails.
    pub fn from_partial(blob: &Value) -> Self {
        let mut settings = Self::default();
        if let Some(theme) = blob.get("theme").and_then(Value::as_str) {
            settings.theme = theme.to_string();
        }
        if let Some(transparent) = blob.get("transparent").and_then(Value::as_bool) {
            settings.transparent = transparent;
        }
        if let Some(size) = blob.get("size").and_then(Value::as_u64) {
            settings.size = size as u32;
        }
        if let Some(show_box) = blob.get("showBox").and_then(Value::as_bool) {
            settings.show_box = show_box;
        }
        settings
    }

    pub fn to_blob(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
    }
}

/// A single-field edit coming from the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Theme(String),
    Transparent(bool),
    Size(u32),
    ShowBox(bool),
}

/// Owns the live [`Settings`] and the host persistence hook.
///
/// The store never hands out shared mutable access: renders take a snapshot,
/// and edits go through [`SettingsStore::apply`], which persists before
/// returning so the refresh broadcast that follows observes durable state.
pub struct SettingsStore {
    backend: Arc<dyn SettingsBackend>,
    current: Settings,
}

impl SettingsStore {
    /// Loads persisted data (if any) merged over defaults. Never fails:
    /// absent or malformed data simply yields defaults.
    pub fn load(backend: Arc<dyn SettingsBackend>) -> Self {
        let current = match backend.load_blob() {
            Some(blob) => Settings::from_partial(&blob),
            None => Settings::default(),
        };
        Self { backend, current }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Snapshot for a render call; later edits do not affect it.
    pub fn snapshot(&self) -> Settings {
        self.current.clone()
    }

    /// Mutates one field and persists the full record.
    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::Theme(theme) => self.current.theme = theme,
            SettingChange::Transparent(v) => self.current.transparent = v,
            SettingChange::Size(v) => self.current.size = v,
            SettingChange::ShowBox(v) => self.current.show_box = v,
        }
        self.save();
    }

    /// Persists the current record through the backend.
    pub fn save(&self) {
        self.backend.save_blob(&self.current.to_blob());
    }
}
