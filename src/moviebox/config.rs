//! # Configuration
//!
//! Settings live in `config.json` inside the config directory
//! (`MOVIEBOX_CONFIG_DIR`, or the platform config directory).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-dir` | platform data dir | Directory holding the movie documents |
//! | `export-file` | `all_movies.json` | Where `moviebox export` writes by default |
//!
//! The data directory is resolved in priority order:
//! 1. `--data-dir` on the command line
//! 2. `MOVIEBOX_DATA` environment variable
//! 3. `data-dir` from `config.json`
//! 4. The platform data directory

use crate::commands::export::DEFAULT_EXPORT_FILE;
use crate::error::{MovieboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const DATA_DIR_ENV: &str = "MOVIEBOX_DATA";
pub const CONFIG_DIR_ENV: &str = "MOVIEBOX_CONFIG_DIR";

pub const KEYS: [&str; 2] = ["data-dir", "export-file"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct MovieboxConfig {
    /// Directory holding the movie documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default destination for exports
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for MovieboxConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_file: default_export_file(),
        }
    }
}

impl MovieboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MovieboxError::Io)?;
        let config: MovieboxConfig = serde_json::from_str(&content).map_err(MovieboxError::Parse)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MovieboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MovieboxError::Serialization)?;
        fs::write(config_path, content).map_err(MovieboxError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-dir" => {
                let value = value.trim();
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "export-file" => {
                if value.trim().is_empty() {
                    return Err("export-file cannot be empty".to_string());
                }
                self.export_file = value.trim().to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Picks the storage directory from, in order, an explicit override,
    /// `MOVIEBOX_DATA` and this config. `None` means the caller's platform
    /// default applies.
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| {
                std::env::var_os(DATA_DIR_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.data_dir.clone())
    }
}
