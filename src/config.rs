//! Configuration loading.
//!
//! Settings merge from lowest to highest priority: built-in defaults, an
//! optional YAML file (`taskbook.yaml` in the working directory, or the path
//! named by `--config` / `TASKBOOK_CONFIG_PATH`), environment variables, then
//! CLI flags applied by the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default port for the read-only web API.
pub const DEFAULT_API_PORT: u16 = 8630;

fn default_db_path() -> PathBuf {
    PathBuf::from("taskbook.db")
}

fn default_port() -> u16 {
    DEFAULT_API_PORT
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Port for the read-only web API (`serve` subcommand).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration, merging file and environment over the defaults.
    ///
    /// A missing config file is not an error; a present but malformed one is.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TASKBOOK_CONFIG_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("taskbook.yaml"));

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            if explicit_path.is_some() {
                warn!(path = %path.display(), "Config file not found, using defaults");
            }
            Self::default()
        };

        if let Ok(db) = std::env::var("TASKBOOK_DB") {
            config.db_path = PathBuf::from(db);
        }
        if let Ok(port) = std::env::var("TASKBOOK_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!(value = %port, "Ignoring unparseable TASKBOOK_PORT"),
            }
        }

        Ok(config)
    }
}
