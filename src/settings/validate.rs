//! Structural checks for tool paths
//!
//! These never touch configuration and never print; callers decide how to
//! present a [`Validation::Invalid`] reason.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Base-name prefix of the L3P executable
pub const L3P_PREFIX: &str = "l3p";

/// Base-name prefix of the POV-Ray executable
pub const POVRAY_PREFIX: &str = "pvengine";

/// Subdirectories every LDraw library has
pub const LDRAW_SUBDIRS: [&str; 2] = ["PARTS", "P"];

/// Outcome of a path check.
///
/// The validators below only return `Valid` or `Invalid`; `Unset` marks an
/// optional path that was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Validation {
    Valid,
    Unset,
    Invalid { reason: String },
}

impl Validation {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid | Self::Unset => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Unset => write!(f, "not set"),
            Self::Invalid { reason } => write!(f, "{}", reason),
        }
    }
}

/// The external tools with a configurable executable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    L3p,
    PovRay,
}

impl Tool {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::L3p => L3P_PREFIX,
            Self::PovRay => POVRAY_PREFIX,
        }
    }
}

/// Expected executable suffix, shown in messages only
pub fn executable_suffix() -> &'static str {
    if cfg!(windows) {
        ".exe"
    } else {
        ""
    }
}

/// Case-normalise a path on Windows; identity elsewhere
pub fn normcase(path: &Path) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(path.to_string_lossy().to_lowercase().replace('/', "\\"))
    } else {
        path.to_path_buf()
    }
}

/// An LDraw library must contain both `PARTS` and `P` directories
pub fn validate_ldraw_path(path: &Path) -> Validation {
    let all_present = LDRAW_SUBDIRS
        .iter()
        .all(|sub| normcase(&path.join(sub)).is_dir());

    if all_present {
        Validation::Valid
    } else {
        Validation::invalid("LDraw path must contain 'PARTS' and 'P' folders")
    }
}

/// A tool path must be a file whose base name starts with `prefix`
pub fn validate_tool_path(path: &Path, prefix: &str) -> Validation {
    let path = normcase(path);
    let prefixed = path
        .file_name()
        .map(|name| name.to_string_lossy().starts_with(prefix))
        .unwrap_or(false);

    if path.is_file() && prefixed {
        Validation::Valid
    } else {
        Validation::invalid(format!(
            "Path must contain executable file with pattern {}*{}",
            prefix,
            executable_suffix()
        ))
    }
}

pub fn validate_l3p_path(path: &Path) -> Validation {
    validate_tool_path(path, Tool::L3p.prefix())
}

pub fn validate_povray_path(path: &Path) -> Validation {
    validate_tool_path(path, Tool::PovRay.prefix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ldraw_with(subdirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for sub in subdirs {
            fs::create_dir(temp.path().join(sub)).unwrap();
        }
        temp
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn ldraw_with_both_folders_is_valid() {
        let lib = ldraw_with(&["PARTS", "P"]);
        assert_eq!(validate_ldraw_path(lib.path()), Validation::Valid);
    }

    #[test]
    fn ldraw_missing_a_folder_is_invalid() {
        for subdirs in [&["PARTS"][..], &["P"][..], &[][..]] {
            let lib = ldraw_with(subdirs);
            let result = validate_ldraw_path(lib.path());
            assert!(!result.is_valid(), "{subdirs:?}");
            assert!(result.reason().unwrap().contains("'PARTS' and 'P'"));
        }
    }

    #[test]
    fn ldraw_folders_must_be_directories() {
        let lib = ldraw_with(&["PARTS"]);
        touch(lib.path(), "P");
        assert!(!validate_ldraw_path(lib.path()).is_valid());
    }

    #[test]
    fn tool_with_prefix_is_valid() {
        let dir = TempDir::new().unwrap();
        let l3p = touch(dir.path(), "l3p.exe");
        assert!(validate_tool_path(&l3p, "l3p").is_valid());
        assert!(validate_l3p_path(&l3p).is_valid());
    }

    #[test]
    fn tool_without_prefix_is_invalid() {
        let dir = TempDir::new().unwrap();
        let tool = touch(dir.path(), "tool.exe");
        let result = validate_tool_path(&tool, "l3p");
        assert!(!result.is_valid());
        assert!(result.reason().unwrap().contains("pattern l3p*"));
    }

    #[test]
    fn prefix_applies_to_base_name_only() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("l3p-tools");
        fs::create_dir(&nested).unwrap();
        let tool = touch(&nested, "render");
        assert!(!validate_l3p_path(&tool).is_valid());

        let pov = touch(dir.path(), "pvengine64.exe");
        assert!(validate_povray_path(&pov).is_valid());
    }

    #[test]
    fn directory_is_not_a_tool() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("l3p");
        fs::create_dir(&sub).unwrap();
        assert!(!validate_l3p_path(&sub).is_valid());
        assert!(!validate_l3p_path(&dir.path().join("l3p-missing")).is_valid());
    }

    #[test]
    fn validation_serializes_with_status() {
        let json = serde_json::to_value(Validation::invalid("bad")).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"], "bad");

        let json = serde_json::to_value(Validation::Unset).unwrap();
        assert_eq!(json["status"], "unset");
        assert!(!Validation::Unset.is_valid());
        assert!(!Validation::Unset.is_invalid());
    }
}
