//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file, then
//! the workspace config file, then `TREEMIRROR_*` environment variables. The
//! binary applies command-line flags on top of the loaded result.

use crate::logging::LoggingConfig;
use crate::tree::node::DEFAULT_ROOT_NAME;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Store location and Root naming
    #[serde(default)]
    pub store: StoreConfig,

    /// Filesystem walk behavior during `init`
    #[serde(default)]
    pub walker: WalkerSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store location; relative paths resolve against the working directory
    #[serde(default = "default_db_file")]
    pub db_file: PathBuf,

    /// Name given to the Root when the store is first initialized
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

/// Default store location, tagged with the on-disk format version
pub fn default_db_file() -> PathBuf {
    PathBuf::from(format!(
        "data-v{}.{}.sled",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    ))
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            root_name: default_root_name(),
        }
    }
}

/// Walker settings as they appear in config files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkerSettings {
    /// Follow symbolic links while walking (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Basenames skipped together with their subtrees
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl WalkerSettings {
    pub fn to_walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            ..WalkerConfig::default()
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Store: {0}")]
    Store(String),

    #[error("Walker: {0}")]
    Walker(String),

    #[error("Logging: {0}")]
    Logging(String),
}

impl MirrorConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.store.db_file.as_os_str().is_empty() {
            errors.push(ValidationError::Store("db_file cannot be empty".to_string()));
        }
        if self.store.root_name.trim().is_empty() {
            errors.push(ValidationError::Store("root_name cannot be empty".to_string()));
        }

        for pattern in &self.walker.ignore_patterns {
            if pattern.is_empty() || pattern.contains('/') {
                errors.push(ValidationError::Walker(format!(
                    "ignore pattern '{}' must be a single non-empty name",
                    pattern
                )));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "format '{}' must be 'text' or 'json'",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
