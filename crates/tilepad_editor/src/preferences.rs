//! Editor preferences and persistent settings
//!
//! Preferences live as pretty-printed JSON in the platform config directory:
//! - Windows: %APPDATA%/tilepad/
//! - Linux: ~/.config/tilepad/
//! - macOS: ~/Library/Application Support/tilepad/

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

/// Maximum number of recent levels to track
pub const MAX_RECENT_LEVELS: usize = 10;

/// Editor preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorPreferences {
    /// Version for future migrations
    pub version: u32,

    // New-level defaults
    pub default_grid_width: u32,
    pub default_grid_height: u32,

    /// On-screen tile size in pixels
    pub tile_display_size: u32,

    // Recent levels
    pub recent_levels: Vec<RecentLevel>,

    /// Directory the last texture import started from
    pub last_import_dir: Option<String>,
}

/// A recent level entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentLevel {
    pub path: String,
    pub name: String,
    pub last_opened: u64, // Unix timestamp
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            version: 1,
            default_grid_width: 32,
            default_grid_height: 32,
            tile_display_size: 16,
            recent_levels: Vec::new(),
            last_import_dir: None,
        }
    }
}

impl EditorPreferences {
    /// Load preferences, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = preferences_path() else {
            return Self::default();
        };
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(preferences) => preferences,
            Err(e) => {
                warn!("ignoring corrupt preferences file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences, creating the config directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = preferences_path() else {
            return Err(std::io::Error::other("no config directory available"));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, content)
    }

    /// Add a level to the recent list (most recent first, deduplicated).
    pub fn add_recent_level(&mut self, path: PathBuf, name: String) {
        use std::time::{SystemTime, UNIX_EPOCH};

        let path_str = path.to_string_lossy().to_string();

        // Remove if already present (will re-add at front)
        self.recent_levels.retain(|l| l.path != path_str);

        self.recent_levels.insert(
            0,
            RecentLevel {
                path: path_str,
                name,
                last_opened: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
            },
        );

        self.recent_levels.truncate(MAX_RECENT_LEVELS);
    }

    /// Remove a level from the recent list (e.g. if the file is gone).
    pub fn remove_recent_level(&mut self, path: &str) {
        self.recent_levels.retain(|l| l.path != path);
    }

    /// The most recently opened level.
    pub fn last_level(&self) -> Option<&RecentLevel> {
        self.recent_levels.first()
    }
}

fn preferences_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tilepad").map(|dirs| dirs.config_dir().join("preferences.json"))
}
