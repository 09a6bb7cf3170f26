//! Configuration model for tinytpl.
//!
//! This module defines the Config struct that represents `tinytpl.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values (`Config::validate`).

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::LogLevel;
