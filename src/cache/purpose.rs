//! Cache purpose tags and where each one lives

use crate::error::LicError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which directory a named cache is created under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// Directly under the root cache, shared by all models
    Root,
    /// Under the active model's cache directory
    Model,
}

impl fmt::Display for CacheScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Category of cached artifact, each with its own subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CachePurpose {
    FinalImages,
    GlImages,
    Parts,
    Templates,
    Dats,
    Povs,
    Pngs,
    Pdfs,
}

impl CachePurpose {
    pub const ALL: [CachePurpose; 8] = [
        Self::FinalImages,
        Self::GlImages,
        Self::Parts,
        Self::Templates,
        Self::Dats,
        Self::Povs,
        Self::Pngs,
        Self::Pdfs,
    ];

    /// Directory name on disk
    pub fn tag(self) -> &'static str {
        match self {
            Self::FinalImages => "Final_Images",
            Self::GlImages => "GL_Images",
            Self::Parts => "parts",
            Self::Templates => "templates",
            Self::Dats => "DATs",
            Self::Povs => "POVs",
            Self::Pngs => "PNGs",
            Self::Pdfs => "PDFs",
        }
    }

    pub fn scope(self) -> CacheScope {
        match self {
            Self::Parts | Self::Templates => CacheScope::Model,
            Self::FinalImages
            | Self::GlImages
            | Self::Dats
            | Self::Povs
            | Self::Pngs
            | Self::Pdfs => CacheScope::Root,
        }
    }

    /// Whether `name` is the directory of a root-scoped cache.
    /// Case-insensitive, since `PNGs` and `pngs` are one directory on
    /// Windows and macOS.
    pub fn is_root_tag(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|p| p.scope() == CacheScope::Root && p.tag().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CachePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CachePurpose {
    type Err = LicError;

    /// Accepts the directory tag in any case, with `-` or `_` separators
    /// (`PNGs`, `pngs`, `final-images`, `GL_Images`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.tag().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| LicError::UnknownPurpose(s.to_string()))
    }
}
