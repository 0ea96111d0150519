use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Host-supplied builder options; every key is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// Offer the static live preview next to the editor
    pub enable_preview_mode: bool,

    /// Save automatically after a quiet period
    pub auto_save: bool,

    /// Searchable, categorized palette instead of the plain grid
    pub enhanced_palette: bool,

    /// Offer the mobile / tablet / desktop preview panel
    pub show_responsive_tester: bool,

    /// Quiet period before an auto-save, in milliseconds
    pub auto_save_delay_ms: u64,

    /// Pointer travel in pixels before a press becomes a drag
    pub drag_activation_distance: f64,

    /// Undo levels kept (0 = unlimited)
    pub history_limit: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            enable_preview_mode: false,
            auto_save: false,
            enhanced_palette: false,
            show_responsive_tester: false,
            auto_save_delay_ms: 2000,
            drag_activation_distance: 8.0,
            history_limit: 0,
        }
    }
}

impl BuilderConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(DEFAULT_CONFIG_NAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn auto_save_delay(&self) -> Duration {
        Duration::from_millis(self.auto_save_delay_ms)
    }
}
