//! Tree builder for mirroring a filesystem subtree into the store

use crate::error::MirrorError;
use crate::store::Store;
use crate::tree::node::{FileNode, FolderNode, Node, DEFAULT_ROOT_NAME};
use crate::tree::path;
use crate::tree::traverse::traverse;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use crate::types::NodePath;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, trace};

/// Outcome of one mirror pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Absolute base path recorded on the Root
    pub base_path: PathBuf,
    pub folders: usize,
    pub files: usize,
    /// Total snapshot bytes captured
    pub bytes: u64,
    /// Records written by the commit, the Root included
    pub records: usize,
    pub duration: Duration,
}

/// Tree builder for mirroring a directory under the store's Root
pub struct TreeBuilder {
    location: PathBuf,
    root_name: String,
    walker_config: WalkerConfig,
}

impl TreeBuilder {
    /// Create a new tree builder for the given location
    pub fn new(location: PathBuf) -> Self {
        Self {
            location,
            root_name: DEFAULT_ROOT_NAME.to_string(),
            walker_config: WalkerConfig::default(),
        }
    }

    /// Name given to the Root if the store does not have one yet
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set walker config (symlinks, ignore patterns, exclusions)
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Mirror the location into `store` as one atomic transaction.
    ///
    /// Existing records whose names collide are replaced; records for paths
    /// that no longer exist are left in place. Any failure discards the whole
    /// pass.
    #[instrument(skip(self, store), fields(location = %self.location.display()))]
    pub fn build(&self, store: &Store) -> Result<BuildSummary, MirrorError> {
        let start = Instant::now();
        info!("Starting mirror pass");

        // Step 1: Resolve the absolute base path
        let base_path = path::canonicalize_path(&self.location)?;
        if !base_path.is_dir() {
            return Err(MirrorError::InvalidPath(format!(
                "{} is not a directory",
                base_path.display()
            )));
        }

        // Step 2: Walk the filesystem, keeping the store itself out of the mirror
        let mut walker_config = self.walker_config.clone();
        if !store.path().as_os_str().is_empty() {
            walker_config
                .exclude_paths
                .push(path::absolutize(store.path())?);
        }
        let entries = match Walker::with_config(base_path.clone(), walker_config).walk() {
            Ok(entries) => {
                debug!(entry_count = entries.len(), "Walked filesystem");
                entries
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        // Step 3: Stage and commit
        let mut summary = self.mirror_entries(store, &base_path, &entries)?;
        summary.duration = start.elapsed();

        info!(
            base = %summary.base_path.display(),
            folders = summary.folders,
            files = summary.files,
            bytes = summary.bytes,
            duration_ms = summary.duration.as_millis(),
            "Mirror pass completed"
        );

        Ok(summary)
    }

    /// Stage walked `entries` below the Root anchored at `base_path`, then
    /// commit them together with the Root. Nothing is written unless every
    /// entry was staged.
    fn mirror_entries(
        &self,
        store: &Store,
        base_path: &Path,
        entries: &[Entry],
    ) -> Result<BuildSummary, MirrorError> {
        let mut root = store.open_root(&self.root_name, base_path)?;
        root.base_path = base_path.to_path_buf();

        let mut txn = store.transaction();
        txn.set_root(root.clone());
        let root = Node::Root(root);

        let mut summary = BuildSummary {
            base_path: base_path.to_path_buf(),
            folders: 0,
            files: 0,
            bytes: 0,
            records: 0,
            duration: Duration::ZERO,
        };
        let mut current: Option<(NodePath, Node)> = None;

        for entry in entries {
            let relative = path::relative_to(base_path, entry.path())?;
            let Some((parent, name)) = relative.split_last() else {
                continue;
            };

            let container = match &current {
                Some((cached, container)) if *cached == parent => container.clone(),
                _ => {
                    debug!(directory = %parent, "Resolving insertion point");
                    let container = traverse(&txn, &root, &parent)?;
                    current = Some((parent.clone(), container.clone()));
                    container
                }
            };

            match entry {
                Entry::File { .. } => {
                    trace!(file = %relative, "Capturing snapshot");
                    let file = FileNode::capture(base_path, parent, name).map_err(|e| {
                        error!("Failed to capture {}: {}", relative, e);
                        e
                    })?;
                    summary.files += 1;
                    summary.bytes += file.content().len() as u64;
                    txn.set(&container, name, file.into())?;
                }
                Entry::Directory { .. } => {
                    summary.folders += 1;
                    txn.set(&container, name, FolderNode::new(name, parent).into())?;
                }
            }
        }

        summary.records = txn.commit()?;
        Ok(summary)
    }
}
