//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Tree building, compaction and aggregation cannot fail, so there is no
//! error type for them.

use thiserror::Error;

/// Errors that can occur while reading method-reference listings
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read listing {source_name}: {error}")]
    ReadFailed {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("{source_name}:{line}: {reason}")]
    InvalidLine {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid type descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Errors that can occur while loading compaction config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
