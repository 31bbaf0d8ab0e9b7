//! Editor configuration, loaded from the platform config directory.
//!
//! Every field has a default; a missing config file is the normal case
//! and a malformed one falls back to defaults with a logged warning
//! rather than refusing to start.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_cursor_glyph() -> char {
    '█'
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Glyph the renderer splices in at the cursor position.
    pub cursor_glyph: char,
    /// Filter directive for the log subscriber, e.g. "info" or
    /// "scrawl=debug".
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cursor_glyph: default_cursor_glyph(),
            log_filter: default_log_filter(),
        }
    }
}

impl EditorConfig {
    /// Loads the config from the platform config directory, falling back
    /// to defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads the config from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "malformed config, using defaults");
                Self::default()
            }
        }
    }
}

/// `<platform config dir>/scrawl/config.json`, when resolvable.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrawl").join("config.json"))
}
