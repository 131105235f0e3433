//! Error types for persistence and configuration loading

use thiserror::Error;

use crate::layout::LayoutError;

/// Errors raised by a room repository backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access room store: {0}")]
    Io(#[from] std::io::Error),
    #[error("Room store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading a canvas configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid canvas config: {0}")]
    Invalid(#[from] LayoutError),
}
