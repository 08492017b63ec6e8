//! Compare and list presentation: text and json formatters.

use crate::error::MirrorError;
use crate::integrity::DriftReport;
use serde_json::json;

/// One child name per line, nothing for an empty container
pub fn format_list_result(names: &[String]) -> String {
    names.join("\n")
}

pub fn format_drift_report_text(report: &DriftReport) -> String {
    if report.is_clean() {
        return format!("No drift ({} files checked)", report.checked);
    }
    let mut output = format!(
        "Drifted files ({} of {} checked):",
        report.drifted.len(),
        report.checked
    );
    for path in report.paths() {
        output.push_str(&format!("\n  {}", path));
    }
    output
}

pub fn format_drift_report_json(report: &DriftReport) -> Result<String, MirrorError> {
    let drifted: Vec<_> = report
        .drifted
        .iter()
        .map(|d| {
            json!({
                "path": d.location.to_string(),
                "stored_size": d.stored_size,
                "live_size": d.live_size,
                "stored_blake3": d.stored_digest,
                "live_blake3": d.live_digest,
            })
        })
        .collect();
    let out = json!({
        "container": report.container.to_string(),
        "checked": report.checked,
        "drifted": drifted,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}
