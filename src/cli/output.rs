//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::MirrorError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &MirrorError) -> String {
    match e {
        MirrorError::NotFound { segment, resolved } if resolved.is_root() => {
            format!("error: '{}' is not in the store. Run `treemirror init` first?", segment)
        }
        MirrorError::NotFound { segment, resolved } => {
            format!("error: '{}' is not in the store under '{}'", segment, resolved)
        }
        other => format!("error: {}", other),
    }
}
