//! JSON output formatter.

use crate::report::{FileReport, PassReport};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    pass: &'a str,
    root: &'a Path,
    timestamp: &'a str,
    dry_run: bool,
    succeeded: bool,
    summary: Summary,
    files: &'a [FileReport],
    duration_ms: u64,
}

#[derive(serde::Serialize)]
struct Summary {
    fixed: usize,
    skipped: usize,
    failed: usize,
}

/// Formats a [`PassReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &PassReport) -> String {
    let (fixed, skipped, failed) = report.count_by_action();
    let output = JsonOutput {
        pass: &report.pass,
        root: &report.root,
        timestamp: &report.timestamp,
        dry_run: report.dry_run,
        succeeded: report.succeeded(),
        summary: Summary {
            fixed,
            skipped,
            failed,
        },
        files: &report.files,
        duration_ms: report.duration_ms,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
