//! Tool path settings: validation and the confirm/cancel edit flow

pub mod draft;
pub mod validate;

pub use draft::{path_statuses, ConfirmError, Field, SettingsDraft};
pub use validate::{
    normcase, validate_l3p_path, validate_ldraw_path, validate_povray_path, validate_tool_path,
    Tool, Validation, L3P_PREFIX, POVRAY_PREFIX,
};
