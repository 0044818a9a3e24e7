//! Application configuration management.
//!
//! This module handles loading and saving the library configuration:
//! the backend base URL, the cache slot name, and an optional cache
//! directory override.
//!
//! Configuration is stored at `~/.config/fleetcache/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cache::store::DEFAULT_SLOT;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "fleetcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default backend address
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_slot")]
    pub cache_slot: String,
    /// Overrides the platform cache directory when set (tests, portable
    /// installs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_slot: default_slot(),
            cache_dir: None,
        }
    }
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

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.cache_slot, "rental-cars");
        assert!(config.cache_dir.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str("{}").expect("parse");
        assert_eq!(config.base_url, "http://localhost:3001");

        let config: Config =
            serde_json::from_str(r#"{"base_url": "https://api.example.com"}"#).expect("parse");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.cache_slot, "rental-cars");
    }

    #[test]
    fn test_cache_dir_override() {
        let config = Config {
            cache_dir: Some(PathBuf::from("/tmp/fleetcache-test")),
            ..Default::default()
        };
        assert_eq!(
            config.cache_dir().expect("cache dir"),
            PathBuf::from("/tmp/fleetcache-test")
        );
    }
}
