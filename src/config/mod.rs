//! Configuration for the console and the mock API server.
//!
//! Loaded from a TOML file; every field has a default so a missing file or a
//! partial file is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ServerConfig};
