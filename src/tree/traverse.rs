//! Path resolution from a container node, one segment at a time

use crate::error::MirrorError;
use crate::store::NodeSource;
use crate::tree::node::Node;
use tracing::trace;

/// Resolve `segments` starting at `start`.
///
/// An empty segment sequence resolves to `start` itself. Each segment must
/// name an existing child of a container; the first absent segment fails with
/// [`MirrorError::NotFound`] carrying the path resolved so far, and a
/// non-container met along the way fails with [`MirrorError::NotAContainer`].
pub fn traverse<S, I>(source: &S, start: &Node, segments: I) -> Result<Node, MirrorError>
where
    S: NodeSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut current = start.clone();

    for segment in segments {
        let segment = segment.as_ref();
        let location = current.location();

        if !current.is_container() {
            return Err(MirrorError::NotAContainer { path: location });
        }

        trace!(segment, at = %location, "Resolving segment");
        current = source
            .child(&location, segment)?
            .ok_or_else(|| MirrorError::NotFound {
                segment: segment.to_string(),
                resolved: location,
            })?;
    }

    Ok(current)
}
