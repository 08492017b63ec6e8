//! Integrity Checker
//!
//! Re-reads live files and compares them byte-for-byte against the snapshots
//! stored in File nodes. A file whose live bytes differ from its snapshot has
//! drifted. The checker never writes to the store.

use crate::error::MirrorError;
use crate::store::NodeSource;
use crate::tree::hasher;
use crate::tree::node::{FileNode, Node};
use crate::types::NodePath;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

/// One file whose live content no longer matches its snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    /// Relative location of the file
    pub location: NodePath,
    pub stored_size: u64,
    pub live_size: u64,
    pub stored_digest: String,
    pub live_digest: String,
}

/// Result of a comparison pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    /// Location of the inspected container
    pub container: NodePath,
    /// Number of File nodes compared
    pub checked: usize,
    /// Drifted files, in container iteration order
    pub drifted: Vec<Drift>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.drifted.is_empty()
    }

    /// Relative paths of the drifted files
    pub fn paths(&self) -> Vec<String> {
        self.drifted.iter().map(|d| d.location.to_string()).collect()
    }
}

/// Compares stored snapshots under a container against the live filesystem
pub struct IntegrityChecker<'a, S: NodeSource + ?Sized> {
    source: &'a S,
    base_path: PathBuf,
}

impl<'a, S: NodeSource + ?Sized> IntegrityChecker<'a, S> {
    /// `base_path` is the Root's absolute base directory
    pub fn new(source: &'a S, base_path: &Path) -> Self {
        Self {
            source,
            base_path: base_path.to_path_buf(),
        }
    }

    /// Compare the direct File children of `container`.
    ///
    /// Folders are skipped, not descended into.
    #[instrument(skip(self, container), fields(container = %container.location()))]
    pub fn compare(&self, container: &Node) -> Result<DriftReport, MirrorError> {
        let location = container.location();
        if !container.is_container() {
            return Err(MirrorError::NotAContainer { path: location });
        }

        let mut report = DriftReport {
            container: location.clone(),
            ..DriftReport::default()
        };

        for name in self.source.child_names(&location)? {
            let child = self
                .source
                .child(&location, &name)?
                .ok_or_else(|| MirrorError::NotFound {
                    segment: name.clone(),
                    resolved: location.clone(),
                })?;

            if let Node::File(file) = child {
                report.checked += 1;
                if let Some(drift) = self.check_file(&file)? {
                    debug!(file = %drift.location, "Drift detected");
                    report.drifted.push(drift);
                }
            }
        }

        info!(
            checked = report.checked,
            drifted = report.drifted.len(),
            "Comparison completed"
        );
        Ok(report)
    }

    /// Apply [`compare`](Self::compare) to `container` and every Folder below
    /// it, in pre-order, merging the results into one report.
    pub fn compare_recursive(&self, container: &Node) -> Result<DriftReport, MirrorError> {
        let mut report = self.compare(container)?;
        let location = container.location();

        for name in self.source.child_names(&location)? {
            if let Some(child @ Node::Folder(_)) = self.source.child(&location, &name)? {
                let nested = self.compare_recursive(&child)?;
                report.checked += nested.checked;
                report.drifted.extend(nested.drifted);
            }
        }

        Ok(report)
    }

    fn check_file(&self, file: &FileNode) -> Result<Option<Drift>, MirrorError> {
        let location = file.location();
        let live_path = location.to_fs_path(&self.base_path);
        trace!(path = %live_path.display(), "Reading live file");

        let live = std::fs::read(&live_path).map_err(|e| MirrorError::io(&live_path, e))?;
        if live == file.content() {
            return Ok(None);
        }

        Ok(Some(Drift {
            location,
            stored_size: file.content().len() as u64,
            live_size: live.len() as u64,
            stored_digest: hasher::content_digest_hex(file.content()),
            live_digest: hasher::content_digest_hex(&live),
        }))
    }
}
