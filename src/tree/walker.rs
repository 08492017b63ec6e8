//! Filesystem walker for traversing directory structures

use crate::error::MirrorError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file
    File { path: PathBuf },
    /// A directory entry with its path
    Directory { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path } | Entry::Directory { path } => path,
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Basenames to skip together with their subtrees (default: none)
    pub ignore_patterns: Vec<String>,
    /// Absolute paths to skip together with their subtrees
    pub exclude_paths: Vec<PathBuf>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all entries below the root
    ///
    /// Entries come in depth-first pre-order with siblings sorted by name, so
    /// every directory precedes its contents.
    pub fn walk(&self) -> Result<Vec<Entry>, MirrorError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = entry?;
            let path = entry.path().to_path_buf();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                entries.push(Entry::Directory { path });
            } else if file_type.is_file() {
                entries.push(Entry::File { path });
            } else if file_type.is_symlink() {
                debug!(path = %path.display(), "Skipping symlink");
            } else {
                warn!(path = %path.display(), "Skipping special file");
            }
        }

        Ok(entries)
    }

    /// Check if an entry should be ignored based on ignore patterns and exclusions
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let path = entry.path();

        if self.config.exclude_paths.iter().any(|excluded| path == excluded) {
            debug!(path = %path.display(), "Excluding path");
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}
