//! Configuration management for forecast-host
//!
//! Configuration is loaded once at process start from
//! `~/.forecast-host/config.json` with environment variable overrides,
//! and handed to the composition root as an immutable snapshot. There is
//! deliberately no global config singleton: the lifecycle controller is
//! an explicit object and receives what it needs at construction.

mod types;

pub use types::*;

use std::path::{Path, PathBuf};

use crate::error::Result;

impl Config {
    /// Returns the forecast-host configuration directory path (~/.forecast-host)
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".forecast-host")
    }

    /// Returns the path to the config file (~/.forecast-host/config.json)
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load configuration from the default path with environment overrides.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// Environment variables override config values using the pattern
    /// `FORECAST_HOST_SECTION_KEY`.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load configuration from a specific path with environment overrides.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FORECAST_HOST_ARTIFACT_URL") {
            self.artifact.url = val;
        }
        if let Ok(val) = std::env::var("FORECAST_HOST_ARTIFACT_DIR") {
            self.artifact.dir = Some(val);
        }
        if let Ok(val) = std::env::var("FORECAST_HOST_ARTIFACT_FILENAME") {
            self.artifact.filename = val;
        }
        if let Ok(val) = std::env::var("FORECAST_HOST_COMPONENT_PORT") {
            if let Ok(v) = val.parse() {
                self.component.port = v;
            }
        }
        if let Ok(val) = std::env::var("FORECAST_HOST_STATUS_HOST") {
            self.status.host = val;
        }
        if let Ok(val) = std::env::var("FORECAST_HOST_STATUS_PORT") {
            if let Ok(v) = val.parse() {
                self.status.port = v;
            }
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the expanded artifact directory (resolves ~ to home,
    /// falls back to the process working directory when unset).
    pub fn artifact_dir(&self) -> PathBuf {
        match &self.artifact.dir {
            Some(dir) => expand_home(dir),
            None => PathBuf::from("."),
        }
    }
}

/// Expand ~ to home directory in a path string
fn expand_home(path: &str) -> PathBuf {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            if path.len() > 1 && path.chars().nth(1) == Some('/') {
                return home.join(&path[2..]);
            }
            return home;
        }
    }

    PathBuf::from(path)
}
