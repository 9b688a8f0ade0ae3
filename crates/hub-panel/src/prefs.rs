//! Size-mode preference persistence.
//!
//! The size mode is a single integer stored under a well-known key in a
//! JSON settings file. Reads never fail: a missing file, malformed JSON,
//! or an out-of-range value all fall back to the default mode. Writes
//! preserve unrelated keys already present in the file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::debug;

use crate::size_mode::SizeMode;

/// Settings key holding the persisted size mode.
const SIZE_MODE_KEY: &str = "panel_size_mode";

/// Handle to the AgentHub settings file.
#[derive(Debug, Clone)]
pub struct Prefs {
    path: PathBuf,
}

impl Prefs {
    /// Creates a handle for an explicit settings path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default settings path (`~/.config/agenthub/settings.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("agenthub").join("settings.json"))
    }

    /// Reads the persisted size mode.
    ///
    /// Any failure (missing file, unreadable file, malformed JSON, wrong
    /// value type, out-of-range integer) yields `SizeMode::Small`.
    pub fn load_size_mode(&self) -> SizeMode {
        match self.read_settings() {
            Ok(settings) => match settings.get(SIZE_MODE_KEY).and_then(Value::as_i64) {
                Some(raw) => SizeMode::from_raw(raw),
                None => SizeMode::Small,
            },
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Settings unavailable, using default size mode");
                SizeMode::Small
            }
        }
    }

    /// Persists the size mode, preserving other keys in the file.
    pub fn save_size_mode(&self, mode: SizeMode) -> Result<()> {
        let mut settings = self.read_settings().unwrap_or_else(|_| json!({}));
        if !settings.is_object() {
            settings = json!({});
        }
        settings[SIZE_MODE_KEY] = json!(mode.as_raw());
        self.write_settings(&settings)
    }

    /// Reads the settings file, returning an empty object if it doesn't exist.
    fn read_settings(&self) -> Result<Value> {
        if !self.path.exists() {
            return Ok(json!({}));
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_settings(&self, settings: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
