//! Filesystem operations the resolver depends on

use std::io;
use std::path::Path;

/// Directory checks and single-level creation.
///
/// Implementations must not create missing parents.
pub trait Filesystem {
    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create exactly one directory at `path`
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}

/// The host filesystem via `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }
}
