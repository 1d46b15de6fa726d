//! Application data root detection

use crate::error::{LicError, LicResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory created under `%APPDATA%` on Windows
pub const APP_DIR_NAME: &str = "licreator";

/// Base directory that holds the cache tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDataRoot(PathBuf);

impl AppDataRoot {
    /// Platform default: `%APPDATA%\licreator` on Windows, the process
    /// working directory elsewhere.
    pub fn detect() -> LicResult<Self> {
        let cwd = || std::env::current_dir().map_err(LicError::CurrentDir);
        Self::for_platform(cfg!(windows), std::env::var_os("APPDATA"), cwd)
    }

    /// Use an explicit directory (from `--data-dir` or the config file).
    ///
    /// Relative paths are anchored to the working directory now, so later
    /// directory changes cannot move the cache tree.
    pub fn from_path(path: impl AsRef<Path>) -> LicResult<Self> {
        let path = path.as_ref();
        std::path::absolute(path).map(Self).map_err(|e| {
            LicError::io(format!("Cannot resolve data root {}", path.display()), e)
        })
    }

    /// Explicit override if given, otherwise the platform default
    pub fn resolve(explicit: Option<&Path>) -> LicResult<Self> {
        match explicit {
            Some(path) => {
                debug!("Using data root override: {}", path.display());
                Self::from_path(path)
            }
            None => Self::detect(),
        }
    }

    fn for_platform(
        windows: bool,
        appdata: Option<OsString>,
        cwd: impl FnOnce() -> LicResult<PathBuf>,
    ) -> LicResult<Self> {
        if windows {
            let appdata = appdata
                .filter(|v| !v.is_empty())
                .ok_or(LicError::AppDataMissing)?;
            Ok(Self(PathBuf::from(appdata).join(APP_DIR_NAME)))
        } else {
            cwd().map(Self)
        }
    }

    /// Create the root (and its parents) if missing.
    ///
    /// The resolver itself only creates single levels, so callers that
    /// cannot guarantee the root exists run this first.
    pub fn ensure_exists(&self) -> LicResult<()> {
        if self.0.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.0).map_err(|e| LicError::cache_create(&self.0, e))?;
        debug!("Created data root {}", self.0.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
