//! Node model: the typed tree stored for a mirrored filesystem.
//!
//! A node is one of three variants. The Root anchors the tree to an absolute
//! base directory, Folders hold named children (through the store), and Files
//! carry an immutable snapshot of the bytes they had when they were captured.

use crate::error::MirrorError;
use crate::types::NodePath;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default name of the single Root entry
pub const DEFAULT_ROOT_NAME: &str = "test";

/// A stored node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Root(RootNode),
    Folder(FolderNode),
    File(FileNode),
}

/// Top-level container; relative paths are resolved against `base_path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootNode {
    pub name: String,
    pub base_path: PathBuf,
}

/// A directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    /// Relative path of the parent directory
    pub path: NodePath,
}

/// A file and its content snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    name: String,
    path: NodePath,
    content: Vec<u8>,
}

impl RootNode {
    pub fn new(name: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
        }
    }
}

impl FolderNode {
    pub fn new(name: impl Into<String>, path: NodePath) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

impl FileNode {
    /// Read `base/path/name` now and keep its bytes as the snapshot.
    pub fn capture(base: &Path, path: NodePath, name: impl Into<String>) -> Result<Self, MirrorError> {
        let name = name.into();
        let fs_path = path.join(&name).to_fs_path(base);
        let content = std::fs::read(&fs_path).map_err(|e| MirrorError::io(&fs_path, e))?;
        Ok(Self {
            name,
            path,
            content,
        })
    }

    /// Build a file node from bytes already in hand.
    pub fn from_bytes(name: impl Into<String>, path: NodePath, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            path,
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// The snapshot taken at capture time
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Relative location of the file itself
    pub fn location(&self) -> NodePath {
        self.path.join(&self.name)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Root(root) => &root.name,
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    /// Relative path of the parent directory (empty for the Root)
    pub fn path(&self) -> NodePath {
        match self {
            Node::Root(_) => NodePath::root(),
            Node::Folder(folder) => folder.path.clone(),
            Node::File(file) => file.path.clone(),
        }
    }

    /// Relative path of the node itself; the Root sits at the empty path.
    pub fn location(&self) -> NodePath {
        match self {
            Node::Root(_) => NodePath::root(),
            Node::Folder(folder) => folder.path.join(&folder.name),
            Node::File(file) => file.location(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Root(_) | Node::Folder(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            _ => None,
        }
    }

    /// Short kind label for presentation and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Folder(_) => "folder",
            Node::File(_) => "file",
        }
    }
}

impl From<RootNode> for Node {
    fn from(root: RootNode) -> Self {
        Node::Root(root)
    }
}

impl From<FolderNode> for Node {
    fn from(folder: FolderNode) -> Self {
        Node::Folder(folder)
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}
