//! Configuration schema for lic
//!
//! Configuration is stored at `~/.config/lic/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// External tool locations
    pub tools: ToolPaths,

    /// Cache settings
    pub cache: CacheConfig,

    /// Renderer activity logs
    pub render: RenderConfig,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Locations of the LDraw library and the external renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    /// LDraw parts library (must contain `PARTS` and `P`)
    pub ldraw: PathBuf,

    /// L3P executable
    pub l3p: PathBuf,

    /// POV-Ray executable
    pub povray: PathBuf,
}

impl Default for ToolPaths {
    /// First-run guesses. Windows gets empty paths and relies on the user
    /// configuring them.
    fn default() -> Self {
        if cfg!(windows) {
            return Self {
                ldraw: PathBuf::new(),
                l3p: PathBuf::new(),
                povray: PathBuf::new(),
            };
        }

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        let ldraw = home.join("LDraw");
        Self {
            l3p: ldraw.join("Apps").join("L3p"),
            povray: home.join("Applications").join("POV-Ray"),
            ldraw,
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Data root override; the platform default is used when unset
    pub root: Option<PathBuf>,
}

/// Whether renderers should keep activity logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Write an access log for each L3P run
    pub l3p_access_log: bool,

    /// Write an access log for each POV-Ray run
    pub povray_access_log: bool,
}
