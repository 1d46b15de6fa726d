//! lic - cache layout and tool paths for the LIC instruction book creator
//!
//! Resolves the purpose-tagged cache directories rendered artifacts are
//! written to, and validates the LDraw library and external renderer
//! locations the rest of the application depends on.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod settings;
pub mod ui;

pub use error::{LicError, LicResult};
