//! Configuration: serde-default structs plus a figment-based loader.

pub mod file_config;
pub mod loader;

pub use file_config::{BackendConfig, FileConfig, ServerConfig};
pub use loader::ConfigLoader;
