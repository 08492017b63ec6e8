//! Lister: child names of a container, in store order

use crate::error::{MirrorError, StorageError};
use crate::store::Store;
use crate::tree::node::Node;
use crate::types::NodePath;

/// Lazy, restartable sequence of the child names of one container
///
/// Nothing is read until [`iter`](Listing::iter) is called, and each call
/// starts a fresh scan of the store.
pub struct Listing<'a> {
    store: &'a Store,
    container: NodePath,
}

impl<'a> Listing<'a> {
    pub fn iter(&self) -> impl Iterator<Item = Result<String, StorageError>> + 'a {
        self.store.scan_children(&self.container)
    }

    /// Drain one scan into a vector
    pub fn collect_names(&self) -> Result<Vec<String>, MirrorError> {
        Ok(self.iter().collect::<Result<Vec<_>, _>>()?)
    }
}

impl<'a> IntoIterator for &Listing<'a> {
    type Item = Result<String, StorageError>;
    type IntoIter = Box<dyn Iterator<Item = Result<String, StorageError>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// List the immediate children of `container`
pub fn list<'a>(store: &'a Store, container: &Node) -> Result<Listing<'a>, MirrorError> {
    if !container.is_container() {
        return Err(MirrorError::NotAContainer {
            path: container.location(),
        });
    }
    Ok(Listing {
        store,
        container: container.location(),
    })
}
