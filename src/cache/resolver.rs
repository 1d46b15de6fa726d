//! Cache directory resolution
//!
//! Layout under the application data root:
//!
//! ```text
//! <root>/cache/                      root cache
//! <root>/cache/{Final_Images,GL_Images,DATs,POVs,PNGs,PDFs}/
//! <root>/cache/<model file name>/    model cache
//! <root>/cache/<model file name>/{parts,templates}/
//! ```
//!
//! Every returned path exists when the call returns. Directories are
//! created one level at a time and never removed.

use super::fs::{Filesystem, OsFilesystem};
use super::purpose::{CachePurpose, CacheScope};
use super::root::AppDataRoot;
use crate::error::{LicError, LicResult};
use crate::session::ModelSession;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the root cache directory under the data root
pub const ROOT_CACHE_DIR: &str = "cache";

/// A model cache directory found under the root cache
#[derive(Debug, Clone, Serialize)]
pub struct ModelCacheEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Resolves purpose-tagged cache directories, creating them on demand
#[derive(Debug, Clone)]
pub struct CacheResolver<F = OsFilesystem> {
    root: AppDataRoot,
    fs: F,
}

impl CacheResolver<OsFilesystem> {
    /// Resolver over the host filesystem
    pub fn new(root: AppDataRoot) -> Self {
        Self::with_fs(root, OsFilesystem)
    }
}

impl<F: Filesystem> CacheResolver<F> {
    pub fn with_fs(root: AppDataRoot, fs: F) -> Self {
        Self { root, fs }
    }

    pub fn data_root(&self) -> &AppDataRoot {
        &self.root
    }

    /// Return `parent/name`, creating it if absent.
    ///
    /// `parent` must already exist. An existing directory is returned
    /// untouched; an existing non-directory is an error.
    pub fn ensure_directory(&self, parent: &Path, name: &str) -> LicResult<PathBuf> {
        let path = parent.join(name);

        if self.fs.is_dir(&path) {
            return Ok(path);
        }
        if self.fs.exists(&path) {
            return Err(LicError::NotADirectory(path));
        }

        match self.fs.create_dir(&path) {
            Ok(()) => debug!("Created cache directory {}", path.display()),
            // lost a creation race
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.fs.is_dir(&path) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.fs.is_dir(parent) => {
                return Err(LicError::ParentMissing(parent.to_path_buf()));
            }
            Err(e) => return Err(LicError::cache_create(path, e)),
        }

        Ok(path)
    }

    /// `<data root>/cache`
    pub fn root_cache(&self) -> LicResult<PathBuf> {
        self.ensure_directory(self.root.path(), ROOT_CACHE_DIR)
    }

    /// `<root cache>/<model file name>` for the session's active model
    pub fn model_cache(&self, session: &ModelSession) -> LicResult<PathBuf> {
        let model = session.model()?;
        if CachePurpose::is_root_tag(model.as_str()) {
            return Err(LicError::InvalidModelName {
                name: model.to_string(),
                reason: "name collides with a shared cache directory".to_string(),
            });
        }
        let root = self.root_cache()?;
        self.ensure_directory(&root, model.as_str())
    }

    /// Directory for `purpose`. Root-scoped purposes ignore the session.
    pub fn named_cache(&self, purpose: CachePurpose, session: &ModelSession) -> LicResult<PathBuf> {
        let base = match purpose.scope() {
            CacheScope::Root => self.root_cache()?,
            CacheScope::Model => self.model_cache(session)?,
        };
        self.ensure_directory(&base, purpose.tag())
    }

    pub fn final_images(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::FinalImages, session)
    }

    pub fn gl_images(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::GlImages, session)
    }

    pub fn parts(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Parts, session)
    }

    pub fn templates(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Templates, session)
    }

    pub fn dats(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Dats, session)
    }

    pub fn povs(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Povs, session)
    }

    pub fn pngs(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Pngs, session)
    }

    pub fn pdfs(&self, session: &ModelSession) -> LicResult<PathBuf> {
        self.named_cache(CachePurpose::Pdfs, session)
    }

    /// Create every named cache for the active model
    pub fn ensure_all(&self, session: &ModelSession) -> LicResult<Vec<(CachePurpose, PathBuf)>> {
        // fail before touching disk when no model is loaded
        session.model()?;
        CachePurpose::ALL
            .into_iter()
            .map(|purpose| -> LicResult<_> {
                Ok((purpose, self.named_cache(purpose, session)?))
            })
            .collect()
    }

    /// Model cache directories currently under the root cache, sorted by name.
    ///
    /// Read-only: a missing root cache yields an empty list.
    pub fn list_model_caches(&self) -> LicResult<Vec<ModelCacheEntry>> {
        let root = self.root.path().join(ROOT_CACHE_DIR);
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let read_err = |e| LicError::io(format!("reading {}", root.display()), e);
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&root).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            if !meta.is_dir() || CachePurpose::is_root_tag(&name) {
                continue;
            }
            entries.push(ModelCacheEntry {
                name,
                path: entry.path(),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
