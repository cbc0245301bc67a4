use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{KanbanError, KanbanResult};

const DEFAULT_DATA_FILE: &str = ".kanban/tasks.json";
const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 5;
pub const MAX_AUTOSAVE_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the task set is stored. Relative paths resolve against the
    /// working directory, so each project gets its own board.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub autosave_interval_secs: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path().filter(|path| path.exists()) {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Like [`AppConfig::load_from`], but a broken file is reported and
    /// replaced by the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("ignoring config {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> KanbanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| KanbanError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Zero is treated as unset; a zero-period interval would spin.
    /// Values above a day are clamped to one day.
    pub fn effective_autosave_interval(&self) -> Duration {
        let secs = match self.autosave_interval_secs {
            None | Some(0) => DEFAULT_AUTOSAVE_INTERVAL_SECS,
            Some(secs) if secs > MAX_AUTOSAVE_INTERVAL_SECS => {
                tracing::warn!(
                    "autosave_interval_secs = {} is too large, using {}",
                    secs,
                    MAX_AUTOSAVE_INTERVAL_SECS
                );
                MAX_AUTOSAVE_INTERVAL_SECS
            }
            Some(secs) => secs,
        };
        Duration::from_secs(secs)
    }
}
