use std::path::Path;

use serde_json::{Value, json};

use crate::app::{PublishOutcome, RunSummary, StatusEntry};
use crate::consts::FILENAME_TIMESTAMP_FORMAT;
use crate::error::PublishError;

fn publish_json(outcome: &PublishOutcome) -> Value {
    match outcome {
        PublishOutcome::Pushed(report) => json!({
            "status": "pushed",
            "remote": report.remote,
            "branch": report.branch,
            "message": report.message,
            "staged": report.staged,
        }),
        PublishOutcome::Skipped => json!({ "status": "skipped" }),
        PublishOutcome::Failed(err) => {
            let mut value = json!({
                "status": err.status(),
                "message": err.to_string(),
            });
            if let PublishError::CommandFailed { step, code, .. } = err {
                value["step"] = json!(step);
                value["code"] = json!(code);
            }
            value
        }
    }
}

/// JSON report for `run`, `generate` and `publish`
pub(crate) fn output_run_json(summary: &RunSummary) -> String {
    let output = json!({
        "timestamp": summary
            .timestamp
            .map(|t| t.format(FILENAME_TIMESTAMP_FORMAT).to_string()),
        "manifest": summary.manifest_path.to_string_lossy(),
        "plots": summary.manifest,
        "publish": publish_json(&summary.publish),
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// JSON report for `status`
pub(crate) fn output_status_json(
    manifest_path: &Path,
    entries: &[StatusEntry],
    accumulated: usize,
) -> String {
    let plots: Vec<Value> = entries
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "path": e.path,
                "exists": e.exists,
            })
        })
        .collect();
    let output = json!({
        "manifest": manifest_path.to_string_lossy(),
        "plots": plots,
        "images_on_disk": accumulated,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
