//! Model session: which model file is currently loaded

pub mod model;

pub use model::{ModelName, ModelSession};
