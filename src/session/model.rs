//! Active model tracking

use crate::error::{LicError, LicResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Base name of a loaded model file, used as its cache directory name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName(String);

impl ModelName {
    /// Validate a model name.
    ///
    /// The name must be usable as a single directory component: non-empty,
    /// not `.` or `..`, and free of path separators.
    pub fn new(name: impl Into<String>) -> LicResult<Self> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name is a relative directory reference")
        } else if name.contains('/') || name.contains('\\') {
            Some("name contains a path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LicError::InvalidModelName {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(Self(name)),
        }
    }

    /// Derive the model name from a model file path (its base name)
    pub fn from_file(path: &Path) -> LicResult<Self> {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(base)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The model currently open in the application.
///
/// Passed to the cache resolver so model-scoped caches follow whichever
/// file is loaded.
#[derive(Debug, Clone, Default)]
pub struct ModelSession {
    file: Option<PathBuf>,
    model: Option<ModelName>,
}

impl ModelSession {
    /// Session with no model loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with `file` already loaded
    pub fn with_file(file: impl Into<PathBuf>) -> LicResult<Self> {
        let mut session = Self::new();
        session.open(file)?;
        Ok(session)
    }

    /// Make `file` the active model. The previous model is replaced only if
    /// the new name is valid.
    pub fn open(&mut self, file: impl Into<PathBuf>) -> LicResult<&ModelName> {
        let file = file.into();
        let model = ModelName::from_file(&file)?;
        self.file = Some(file);
        Ok(&*self.model.insert(model))
    }

    /// Unload the active model
    pub fn close(&mut self) {
        self.file = None;
        self.model = None;
    }

    /// Active model, or `NoActiveModel`
    pub fn model(&self) -> LicResult<&ModelName> {
        self.model.as_ref().ok_or(LicError::NoActiveModel)
    }

    /// Path of the loaded model file, if any
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }
}
