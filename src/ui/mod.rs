//! Terminal output helpers
//!
//! Uses `cliclack` log lines in interactive terminals with a plain
//! `[OK]`/`[FAIL]` fallback for CI and piped output.

mod context;
mod output;

pub use context::UiContext;
pub use output::{path_status, section, step_error_detail, step_ok, step_ok_detail, step_warn_hint};
