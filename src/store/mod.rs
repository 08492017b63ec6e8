//! Node Store
//!
//! Persistence adapter for the node tree. Nodes are handed to the store; they
//! do not know how they are persisted. Reads go through the [`NodeSource`]
//! trait so that traversal works the same against committed state and against
//! an open write transaction.

pub mod persistence;

pub use persistence::{Store, Transaction};

use crate::error::StorageError;
use crate::tree::node::{Node, RootNode};
use crate::types::NodePath;

/// Key of the Root record. Child keys always contain a 0x00 separator, so
/// this key never collides with a child and never matches a children prefix.
pub(crate) const ROOT_KEY: &[u8] = b"@root";

const SEPARATOR: u8 = 0x00;

/// Read access to a node tree
pub trait NodeSource {
    /// The Root record, if one has been stored
    fn root(&self) -> Result<Option<RootNode>, StorageError>;

    /// Child `name` of the container at `parent`
    fn child(&self, parent: &NodePath, name: &str) -> Result<Option<Node>, StorageError>;

    /// Child names of the container at `parent`, in store order
    fn child_names(&self, parent: &NodePath) -> Result<Vec<String>, StorageError>;
}

/// Prefix shared by every child key of the container at `parent`
pub(crate) fn children_prefix(parent: &NodePath) -> Vec<u8> {
    let mut key = parent.to_string().into_bytes();
    key.push(SEPARATOR);
    key
}

/// Store key of child `name` under `parent`
pub(crate) fn child_key(parent: &NodePath, name: &str) -> Vec<u8> {
    let mut key = children_prefix(parent);
    key.extend_from_slice(name.as_bytes());
    key
}

/// Extract the child name from a key that starts with `prefix_len` prefix bytes
pub(crate) fn name_from_key(key: &[u8], prefix_len: usize) -> Result<String, StorageError> {
    let name = key
        .get(prefix_len..)
        .ok_or_else(|| StorageError::InvalidKey(format!("{:?}", key)))?;
    String::from_utf8(name.to_vec()).map_err(|e| StorageError::InvalidKey(e.to_string()))
}

pub(crate) fn encode(node: &Node) -> Result<Vec<u8>, StorageError> {
    Ok(bincode::serialize(node)?)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Node, StorageError> {
    Ok(bincode::deserialize(bytes)?)
}
