//! Edit buffer for tool paths
//!
//! A draft starts from the current [`ToolPaths`] and only reaches the
//! configuration through [`SettingsDraft::confirm`].

use super::validate::{
    normcase, validate_l3p_path, validate_ldraw_path, validate_povray_path, validate_tool_path,
    Tool, Validation,
};
use crate::config::{Config, ToolPaths};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One of the three configurable paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ldraw,
    L3p,
    PovRay,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ldraw => write!(f, "LDraw"),
            Self::L3p => write!(f, "L3P"),
            Self::PovRay => write!(f, "POV-Ray"),
        }
    }
}

/// Status of every tool path.
///
/// The library path is always checked. An empty L3P or POV-Ray path is
/// [`Validation::Unset`], never a failure.
pub fn path_statuses(tools: &ToolPaths) -> [(Field, &Path, Validation); 3] {
    [
        (Field::Ldraw, tools.ldraw.as_path(), validate_ldraw_path(&tools.ldraw)),
        (Field::L3p, tools.l3p.as_path(), optional(&tools.l3p, validate_l3p_path)),
        (
            Field::PovRay,
            tools.povray.as_path(),
            optional(&tools.povray, validate_povray_path),
        ),
    ]
}

fn optional(path: &Path, check: fn(&Path) -> Validation) -> Validation {
    if path.as_os_str().is_empty() {
        Validation::Unset
    } else {
        check(path)
    }
}

/// A rejected confirmation. The draft is handed back unchanged.
#[derive(Debug)]
pub struct ConfirmError {
    pub draft: SettingsDraft,
    pub field: Field,
    pub reason: String,
}

impl fmt::Display for ConfirmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} path: {}", self.field, self.reason)
    }
}

impl std::error::Error for ConfirmError {}

/// In-progress edit of the tool paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    paths: ToolPaths,
}

impl SettingsDraft {
    pub fn new(current: &ToolPaths) -> Self {
        Self {
            paths: current.clone(),
        }
    }

    pub fn paths(&self) -> &ToolPaths {
        &self.paths
    }

    /// Replace the library path if `path` is a valid LDraw library
    pub fn set_ldraw(&mut self, path: impl AsRef<Path>) -> Validation {
        let path = path.as_ref();
        let result = validate_ldraw_path(path);
        if result.is_valid() {
            self.paths.ldraw = normcase(path);
        }
        result
    }

    /// Replace the L3P path if `path` names an L3P executable
    pub fn set_l3p(&mut self, path: impl AsRef<Path>) -> Validation {
        Self::set_tool(&mut self.paths.l3p, path.as_ref(), Tool::L3p)
    }

    /// Replace the POV-Ray path if `path` names a POV-Ray executable
    pub fn set_povray(&mut self, path: impl AsRef<Path>) -> Validation {
        Self::set_tool(&mut self.paths.povray, path.as_ref(), Tool::PovRay)
    }

    fn set_tool(slot: &mut PathBuf, path: &Path, tool: Tool) -> Validation {
        let result = validate_tool_path(path, tool.prefix());
        if result.is_valid() {
            *slot = normcase(path);
        }
        result
    }

    /// Unchecked edits, checked again on confirm
    pub fn edit_ldraw(&mut self, path: impl Into<PathBuf>) {
        self.paths.ldraw = path.into();
    }

    pub fn edit_l3p(&mut self, path: impl Into<PathBuf>) {
        self.paths.l3p = path.into();
    }

    pub fn edit_povray(&mut self, path: impl Into<PathBuf>) {
        self.paths.povray = path.into();
    }

    /// Check the draft without applying it.
    ///
    /// Only the library path gates a confirm. Tool paths are checked when
    /// they are picked through `set_l3p` / `set_povray`.
    pub fn check(&self) -> Result<(), (Field, String)> {
        match validate_ldraw_path(&self.paths.ldraw) {
            Validation::Invalid { reason } => Err((Field::Ldraw, reason)),
            _ => Ok(()),
        }
    }

    /// Apply the draft to `config`. On failure `config` is untouched and
    /// the draft comes back inside the error.
    pub fn confirm(self, config: &mut Config) -> Result<(), ConfirmError> {
        match self.check() {
            Ok(()) => {
                debug!("Tool paths confirmed: {:?}", self.paths);
                config.tools = self.paths;
                Ok(())
            }
            Err((field, reason)) => Err(ConfirmError {
                draft: self,
                field,
                reason,
            }),
        }
    }

    /// Discard the draft
    pub fn cancel(self) {
        debug!("Tool path edit cancelled");
    }
}
