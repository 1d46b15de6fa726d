//! CLI command implementations

pub mod cache;
pub mod config;
pub mod tools;

pub use cache::execute as cache;
pub use config::execute as config;
pub use tools::execute as tools;
