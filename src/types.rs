//! Shared value types: content digests and relative node paths.

use crate::error::MirrorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// BLAKE3 digest of a file snapshot
pub type Hash = [u8; 32];

/// Path of a node relative to the mirrored root, as ordered segments.
///
/// The empty path addresses the Root itself. Segments never contain `/`,
/// are never empty, and are never `.` or `..`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// The empty path (the Root's own location)
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a `/`-separated relative path.
    ///
    /// Empty segments and `.` are dropped; `..` is rejected.
    pub fn parse(text: &str) -> Result<Self, MirrorError> {
        let mut segments = Vec::new();
        for segment in text.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(MirrorError::InvalidPath(format!(
                        "parent segments are not allowed: {}",
                        text
                    )))
                }
                s => segments.push(s.to_string()),
            }
        }
        Ok(Self(segments))
    }

    /// Build a path from a filesystem path relative to the mirrored root.
    pub fn from_relative(relative: &Path) -> Result<Self, MirrorError> {
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                std::path::Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| {
                        MirrorError::InvalidPath(format!(
                            "non UTF-8 name in {}",
                            relative.display()
                        ))
                    })?;
                    segments.push(name.to_string());
                }
                std::path::Component::CurDir => {}
                _ => {
                    return Err(MirrorError::InvalidPath(format!(
                        "not a relative path: {}",
                        relative.display()
                    )))
                }
            }
        }
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path with `name` appended
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Split into the parent path and the last segment; `None` for the root
    pub fn split_last(&self) -> Option<(NodePath, &str)> {
        self.0
            .split_last()
            .map(|(last, parent)| (NodePath(parent.to_vec()), last.as_str()))
    }

    /// Resolve against an absolute base directory
    pub fn to_fs_path(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for segment in &self.0 {
            path.push(segment);
        }
        path
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl From<Vec<String>> for NodePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<'a> IntoIterator for &'a NodePath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
