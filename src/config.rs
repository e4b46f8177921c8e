//! Configuration file discovery and loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

const CONFIG_DIR_NAME: &str = "regform";
const CONFIG_FILE_NAME: &str = "config.json";

/// Settings read from config.json. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory that receives exported CSV files
    pub output_dir: PathBuf,
    /// Directory for regform.log (None = <data dir>/regform)
    pub log_dir: Option<PathBuf>,
    /// Default log filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the log directory, falling back to the platform data dir
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(CONFIG_DIR_NAME)
        })
    }
}

/// Find config.json in order of priority:
/// 1. ./regform/config.json (local project customization)
/// 2. <config dir>/regform/config.json (global user config)
pub fn find_config_path() -> Option<PathBuf> {
    let local_path = PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Some(local_path);
    }

    let global_path = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    global_path.exists().then_some(global_path)
}

/// Load the explicit config if given, else the first one found, else defaults
pub fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>), AppError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_path(),
    };

    match path {
        Some(path) => Ok((AppConfig::load(&path)?, Some(path))),
        None => Ok((AppConfig::default(), None)),
    }
}
