//! CLI presentation: text and json formatters per command family.

mod drift;
mod init;

pub use drift::{format_drift_report_json, format_drift_report_text, format_list_result};
pub use init::format_init_summary;
