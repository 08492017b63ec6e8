//! Init command presentation: mirror pass summary.

use crate::tree::builder::BuildSummary;

pub fn format_init_summary(summary: &BuildSummary) -> String {
    let mut output = format!("Mirrored {}\n", summary.base_path.display());
    output.push_str(&format!("  Folders: {}\n", summary.folders));
    output.push_str(&format!("  Files: {}\n", summary.files));
    output.push_str(&format!("  Bytes: {}\n", summary.bytes));
    output.push_str(&format!("  Records written: {}\n", summary.records));
    output.push_str(&format!("  Took {} ms", summary.duration.as_millis()));
    output
}
