use crate::error::{Result, TodoError};
use crate::store::fs::DEFAULT_STORE_FILENAME;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todos, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Where the todo list lives. Defaults to `todos.json` in the data directory.
    #[serde(default)]
    pub store_file: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_file: None,
            color: default_color(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Picks the store file: an explicit override (flag or env), then the
    /// configured `store_file`, then `todos.json` under `data_dir`.
    pub fn resolve_store_path(&self, explicit: Option<PathBuf>, data_dir: &Path) -> PathBuf {
        explicit
            .or_else(|| self.store_file.clone())
            .unwrap_or_else(|| data_dir.join(DEFAULT_STORE_FILENAME))
    }
}
