//! Error types for lifeterm_core.
//!
//! The simulation itself cannot fail; only loading configuration can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// File system errors
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Values that parse but make no sense
    #[error("Validation error: {0}")]
    Invalid(String),
}

/// Result type alias for lifeterm_core configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
