//! Error types for lic
//!
//! All modules use `LicResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lic operations
pub type LicResult<T> = Result<T, LicError>;

/// All errors that can occur in lic
#[derive(Error, Debug)]
pub enum LicError {
    // Environment errors
    #[error("APPDATA is not set; cannot locate the application data directory")]
    AppDataMissing,

    #[error("Cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),

    // Cache errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("Parent directory does not exist: {0}")]
    ParentMissing(PathBuf),

    #[error("No model is loaded")]
    NoActiveModel,

    #[error("Invalid model name {name:?}: {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("Unknown cache purpose: {0}")]
    UnknownPurpose(String),

    // Tool path errors
    #[error("Invalid {tool} path {path}: {reason}")]
    InvalidToolPath {
        tool: String,
        path: PathBuf,
        reason: String,
    },

    #[error("{0} of 3 tool paths failed the check")]
    ToolCheckFailed(usize),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    User(String),
}

impl LicError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a cache directory creation error
    pub fn cache_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheDirCreate {
            path: path.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::AppDataMissing => Some("Set APPDATA or pass --data-dir"),
            Self::NoActiveModel => Some("Pass --model <FILE>"),
            Self::InvalidToolPath { .. } => Some("Run: lic tools show"),
            Self::ToolCheckFailed(_) => Some("Fix them with: lic tools set"),
            Self::ParentMissing(_) => Some("Create the data directory or pass --data-dir"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LicError::NotADirectory(PathBuf::from("/tmp/cache"));
        assert_eq!(err.to_string(), "/tmp/cache exists but is not a directory");
    }

    #[test]
    fn error_hint() {
        assert_eq!(LicError::NoActiveModel.hint(), Some("Pass --model <FILE>"));
        assert_eq!(LicError::UnknownPurpose("x".into()).hint(), None);
        assert!(LicError::ToolCheckFailed(2).hint().is_some());
    }

    #[test]
    fn cache_create_keeps_source() {
        use std::error::Error as _;
        let err = LicError::cache_create(
            "/nope/cache",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/nope/cache"));
        assert!(err.source().is_some());
    }
}
