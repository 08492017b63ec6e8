//! Error types for the treemirror system.

use crate::types::NodePath;
use std::path::PathBuf;
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store engine error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Failed to encode or decode node record: {0}")]
    Codec(#[from] bincode::Error),

    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Operation-level errors surfaced by build, list and compare
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Not found: '{segment}' under '{resolved}'")]
    NotFound { segment: String, resolved: NodePath },

    #[error("Not a container: '{path}'")]
    NotAContainer { path: NodePath },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MirrorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MirrorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for MirrorError {
    fn from(err: config::ConfigError) -> Self {
        MirrorError::ConfigError(err.to_string())
    }
}
