//! Cache directory layout
//!
//! Generated artifacts (rendered images, converted DAT/POV files, PDFs,
//! part renders and templates) are kept in purpose-tagged directories under
//! `<data root>/cache`. Shared artifacts sit directly under the root cache,
//! per-model ones under a directory named after the loaded model file.
//!
//! | Tag | Scope |
//! |-----|-------|
//! | `parts`, `templates` | model |
//! | `Final_Images`, `GL_Images`, `DATs`, `POVs`, `PNGs`, `PDFs` | root |

pub mod fs;
pub mod purpose;
pub mod resolver;
pub mod root;

pub use fs::{Filesystem, OsFilesystem};
pub use purpose::{CachePurpose, CacheScope};
pub use resolver::{CacheResolver, ModelCacheEntry, ROOT_CACHE_DIR};
pub use root::{AppDataRoot, APP_DIR_NAME};
