//! Stylesheet discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects stylesheets under `root`.
///
/// A regular file, or a symlink to one, is collected when its file name ends
/// with `.<extension>` and contains none of the `exclude` markers. Entries
/// the walker cannot read are skipped. The result is sorted by the byte order
/// of the path string so that output is reproducible across runs and file
/// systems.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use wxss_fix::discovery::collect_stylesheets;
///
/// let files = collect_stylesheets(Path::new("."), "wxss", &["test_".to_string()]);
/// ```
pub fn collect_stylesheets(root: &Path, extension: &str, exclude: &[String]) -> Vec<PathBuf> {
    let suffix = format!(".{extension}");
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        // Follows symlinked files; symlinked directories are not descended.
        .filter(|e| e.path().is_file())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            name.ends_with(&suffix) && !exclude.iter().any(|marker| name.contains(marker.as_str()))
        })
        .map(|e| e.into_path())
        .collect();

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}
