//! Pass orchestration.
//!
//! [`run_pass`] is the entry point shared by the `patch` and `repair`
//! commands: discover stylesheets, then read, transform and conditionally
//! rewrite them one at a time.

use crate::config::Config;
use crate::discovery::collect_stylesheets;
use crate::passes::Pass;
use crate::report::{FileReport, PassReport};
use std::path::Path;
use std::time::Instant;

/// Runs `pass` over every stylesheet under `root`.
///
/// # Pipeline
///
/// 1. Collects the files matching the configured extension, minus the pass's
///    exclusion markers, sorted by path.
/// 2. For each file in order: reads it as UTF-8, applies
///    [`Pass::transform`] and writes the result back only if it differs.
/// 3. Records a [`FileReport`] per file. A file that cannot be read or
///    written is reported as failed and the run moves on to the next one.
///
/// With `dry_run` set, nothing is written; changed files are still reported
/// as fixed with the rules that would apply.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use wxss_fix::{config::Config, passes::repair::CommentRepair, runner};
///
/// let config = Config::load(None).unwrap();
/// let report = runner::run_pass(Path::new("."), &CommentRepair, &config, false);
///
/// std::process::exit(if report.succeeded() { 0 } else { 1 });
/// ```
pub fn run_pass(root: &Path, pass: &dyn Pass, config: &Config, dry_run: bool) -> PassReport {
    let start = Instant::now();
    let mut report = PassReport::new(pass.name(), root.to_path_buf(), dry_run);

    let files = collect_stylesheets(
        root,
        &config.discovery.extension,
        config.excludes_for(pass.name()),
    );

    for file in files {
        let file_report = process_file(&file, pass, dry_run);
        report.files.push(file_report);
    }

    report.duration_ms = start.elapsed().as_millis() as u64;
    report
}

/// Reads, transforms and conditionally rewrites a single file.
pub fn process_file(path: &Path, pass: &dyn Pass, dry_run: bool) -> FileReport {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return FileReport::failed(path.to_path_buf(), format!("Could not read file: {e}"))
        }
    };

    let transformed = pass.transform(&content);
    if transformed.content == content {
        return FileReport::skipped(path.to_path_buf());
    }

    if !dry_run {
        if let Err(e) = std::fs::write(path, &transformed.content) {
            return FileReport::failed(path.to_path_buf(), format!("Could not write file: {e}"));
        }
    }

    FileReport::fixed(path.to_path_buf(), &transformed.applied)
}
