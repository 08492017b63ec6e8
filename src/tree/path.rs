//! Path canonicalization and base-relative path utilities

use crate::error::MirrorError;
use crate::types::NodePath;
use std::path::{Path, PathBuf};

/// Canonicalize a path into the absolute form stored on the Root
///
/// Resolves symlinks, `.` and `..`, and removes trailing separators. `dunce`
/// keeps Windows paths out of the verbatim `\\?\` form.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, MirrorError> {
    dunce::canonicalize(path).map_err(|e| MirrorError::io(path, e))
}

/// Absolute form of a path that may not exist yet
///
/// Used for the store location, which sled creates on first open.
pub fn absolutize(path: &Path) -> Result<PathBuf, MirrorError> {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return Ok(canonical);
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| MirrorError::io(".", e))?;
    Ok(cwd.join(path))
}

/// Relative node path of `path` below `base`
pub fn relative_to(base: &Path, path: &Path) -> Result<NodePath, MirrorError> {
    let relative = path.strip_prefix(base).map_err(|_| {
        MirrorError::InvalidPath(format!(
            "{} is not inside {}",
            path.display(),
            base.display()
        ))
    })?;
    NodePath::from_relative(relative)
}
