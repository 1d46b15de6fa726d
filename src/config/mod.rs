//! Persistent settings: tool paths, data root override and render flags
//!
//! Stored as TOML. A missing file means every section takes its default.

pub mod schema;

pub use schema::{CacheConfig, Config, GeneralConfig, RenderConfig, ToolPaths};

use crate::error::{LicError, LicResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the lic settings file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the per-user settings file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for a settings file given by `--config` / `LIC_CONFIG`
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<config dir>/lic/config.toml`, or `./lic/config.toml` when the
    /// platform has no config directory
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lic")
            .join("config.toml")
    }

    /// Current settings. A missing file is not an error; the defaults
    /// (empty tool paths on Windows, home-relative ones elsewhere) apply.
    pub async fn load(&self) -> LicResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Parse `path`. Sections and keys absent from the file keep their
    /// defaults; malformed TOML is `ConfigInvalid` naming the file.
    pub async fn load_from_file(&self, path: &Path) -> LicResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| LicError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| LicError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write `config`, creating the parent directory
    pub async fn save(&self, config: &Config) -> LicResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            LicError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    async fn ensure_config_dir(&self) -> LicResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| LicError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Settings file this manager reads and writes
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
