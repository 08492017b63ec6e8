//! Persistence layer for the node tree

use crate::error::StorageError;
use crate::store::{
    child_key, children_prefix, decode, encode, name_from_key, NodeSource, ROOT_KEY,
};
use crate::tree::node::{Node, RootNode};
use crate::types::NodePath;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NODES_TREE: &str = "nodes";

/// Sled-backed node store
pub struct Store {
    db: sled::Db,
    nodes: sled::Tree,
    path: PathBuf,
}

impl Store {
    /// Open (or create) a store at the given path
    ///
    /// Sled keeps its data in a directory; the path names that directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let db = sled::open(&path)?;
        let nodes = db.open_tree(NODES_TREE)?;
        debug!(store = %path.display(), "Opened store");
        Ok(Self { db, nodes, path })
    }

    /// Open a throwaway store that is removed when dropped
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        let nodes = db.open_tree(NODES_TREE)?;
        Ok(Self {
            db,
            nodes,
            path: PathBuf::new(),
        })
    }

    /// Location of the store on disk (empty for temporary stores)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stored Root, or a new unsaved Root anchored at `default_base`.
    ///
    /// Repeated calls return the same logical Root. A new Root is persisted by
    /// the next committed [`Transaction`] that sets it.
    pub fn open_root(&self, name: &str, default_base: &Path) -> Result<RootNode, StorageError> {
        match self.root()? {
            Some(root) => Ok(root),
            None => {
                debug!(root = name, base = %default_base.display(), "No stored root, creating");
                Ok(RootNode::new(name, default_base))
            }
        }
    }

    /// Lookup of child `name` in `container`
    pub fn get(&self, container: &Node, name: &str) -> Result<Option<Node>, StorageError> {
        self.child(&container.location(), name)
    }

    /// Lazily scan the child names of the container at `parent`.
    ///
    /// Every call opens a fresh scan.
    pub fn scan_children(
        &self,
        parent: &NodePath,
    ) -> impl Iterator<Item = Result<String, StorageError>> + '_ {
        let prefix = children_prefix(parent);
        let prefix_len = prefix.len();
        self.nodes.scan_prefix(prefix).keys().map(move |key| {
            let key = key?;
            name_from_key(&key, prefix_len)
        })
    }

    /// Begin a write transaction
    pub fn transaction(&self) -> Transaction<'_> {
        Transaction {
            store: self,
            root: None,
            pending: BTreeMap::new(),
            committed: false,
        }
    }

    /// Number of stored records, the Root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeSource for Store {
    fn root(&self) -> Result<Option<RootNode>, StorageError> {
        match self.nodes.get(ROOT_KEY)? {
            Some(bytes) => match decode(&bytes)? {
                Node::Root(root) => Ok(Some(root)),
                other => Err(StorageError::InvalidKey(format!(
                    "root key holds a {} record",
                    other.kind()
                ))),
            },
            None => Ok(None),
        }
    }

    fn child(&self, parent: &NodePath, name: &str) -> Result<Option<Node>, StorageError> {
        match self.nodes.get(child_key(parent, name))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn child_names(&self, parent: &NodePath) -> Result<Vec<String>, StorageError> {
        self.scan_children(parent).collect()
    }
}

/// Pending mutations against a [`Store`], applied atomically by [`commit`].
///
/// Reads through the transaction see its own pending writes. Dropping a
/// transaction without committing discards every pending write.
///
/// [`commit`]: Transaction::commit
pub struct Transaction<'a> {
    store: &'a Store,
    root: Option<RootNode>,
    pending: BTreeMap<Vec<u8>, Node>,
    committed: bool,
}

impl<'a> Transaction<'a> {
    /// Stage the Root record
    pub fn set_root(&mut self, root: RootNode) {
        self.root = Some(root);
    }

    /// Insert or replace `node` under `key` in `container`.
    ///
    /// The key must be the node's name and the container must be the node's
    /// parent, so a record always sits where its own `path` says it does.
    pub fn set(&mut self, container: &Node, key: &str, node: Node) -> Result<(), StorageError> {
        if !container.is_container() {
            return Err(StorageError::InvalidKey(format!(
                "cannot insert '{}' into {} '{}'",
                key,
                container.kind(),
                container.location()
            )));
        }
        let parent = container.location();
        if node.name() != key || node.path() != parent {
            return Err(StorageError::InvalidKey(format!(
                "record '{}' at '{}' does not belong under key '{}' of '{}'",
                node.name(),
                node.path(),
                key,
                parent
            )));
        }
        self.pending.insert(child_key(&parent, key), node);
        Ok(())
    }

    /// Number of staged records, the Root included
    pub fn len(&self) -> usize {
        self.pending.len() + usize::from(self.root.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply every staged record in one atomic batch and flush it to disk.
    ///
    /// Returns the number of records written.
    pub fn commit(mut self) -> Result<usize, StorageError> {
        let mut batch = sled::Batch::default();
        let mut written = 0;

        if let Some(root) = self.root.take() {
            batch.insert(ROOT_KEY, encode(&Node::Root(root))?);
            written += 1;
        }
        for (key, node) in std::mem::take(&mut self.pending) {
            batch.insert(key, encode(&node)?);
            written += 1;
        }

        self.store.nodes.apply_batch(batch)?;
        self.store.db.flush()?;
        self.committed = true;

        info!(records = written, "Committed transaction");
        Ok(written)
    }
}

impl NodeSource for Transaction<'_> {
    fn root(&self) -> Result<Option<RootNode>, StorageError> {
        match &self.root {
            Some(root) => Ok(Some(root.clone())),
            None => self.store.root(),
        }
    }

    fn child(&self, parent: &NodePath, name: &str) -> Result<Option<Node>, StorageError> {
        match self.pending.get(&child_key(parent, name)) {
            Some(node) => Ok(Some(node.clone())),
            None => self.store.child(parent, name),
        }
    }

    fn child_names(&self, parent: &NodePath) -> Result<Vec<String>, StorageError> {
        let mut names: BTreeSet<String> = self.store.child_names(parent)?.into_iter().collect();

        let prefix = children_prefix(parent);
        for key in self
            .pending
            .range(prefix.clone()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(&prefix))
        {
            names.insert(name_from_key(key, prefix.len())?);
        }

        Ok(names.into_iter().collect())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed && !self.is_empty() {
            debug!(discarded = self.len(), "Dropping uncommitted transaction");
        }
    }
}
