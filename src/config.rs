//! Application configuration management.
//!
//! Stores the backend URL and the last used trip name at
//! `~/.config/tripbrief/config.json`. The server URL can be overridden per
//! invocation with `--server` or the `TRIPBRIEF_SERVER` environment variable.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/draft directory paths
const APP_NAME: &str = "tripbrief";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default backend address, matching the companion server's port
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured server URL
const SERVER_ENV_VAR: &str = "TRIPBRIEF_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub server_url: Option<String>,
    pub last_trip_name: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn draft_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Resolve the backend URL: CLI flag, then environment, then config
    /// file, then the default.
    pub fn resolve_server_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        if let Ok(url) = std::env::var(SERVER_ENV_VAR) {
            if !url.is_empty() {
                return url;
            }
        }
        self.server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}
