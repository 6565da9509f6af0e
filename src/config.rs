//! Client configuration management.
//!
//! Holds the API base URL and the last used username. Stored at
//! `~/.config/mbmanager-client/config.json`; the base URL can be
//! overridden with the `MBMANAGER_URL` environment variable (a `.env`
//! file is honored).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/state directory paths
const APP_NAME: &str = "mbmanager-client";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured base URL
const URL_ENV_VAR: &str = "MBMANAGER_URL";

/// Default base URL of a locally running server
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub last_username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            last_username: None,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when absent.
    /// `MBMANAGER_URL` (environment or `.env`) overrides the base URL.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(URL_ENV_VAR) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        Ok(config)
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

    /// Directory for mutable client state (the session file).
    pub fn state_dir(&self) -> Result<PathBuf> {
        let state_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(state_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert!(config.last_username.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            base_url: "https://backups.example.com/api/v1".into(),
            last_username: Some("admin".into()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.last_username.as_deref(), Some("admin"));
    }
}
