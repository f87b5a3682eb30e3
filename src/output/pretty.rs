//! Human-readable colored text formatter.

use crate::report::{FileAction, PassReport};
use colored::Colorize;

/// Formats a [`PassReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — pass name, number of stylesheets found and the root.
/// 2. **Files** — one line per file: `✓` fixed, `-` skipped, `✗` failed.
/// 3. **Summary** — total number of changed files.
pub fn format(report: &PassReport) -> String {
    let mut out = String::new();

    let verb = if report.dry_run { "would fix" } else { "fixed" };

    out.push_str(&format!(
        "{}\n",
        format!(
            "{}: {} stylesheet(s) under {}",
            report.pass,
            report.files.len(),
            report.root.display()
        )
        .bold()
    ));
    if report.dry_run {
        out.push_str(&format!("{}\n", "  dry run, no files written".dimmed()));
    }

    for file in &report.files {
        match file.action {
            FileAction::Fixed => {
                out.push_str(&format!(
                    "  {} {:<9} {}",
                    "✓".green().bold(),
                    verb.green(),
                    file.path.display()
                ));
                if !file.rules_applied.is_empty() {
                    out.push_str(&format!(
                        "  {}",
                        format!("[{}]", file.rules_applied.join(", ")).dimmed()
                    ));
                }
                out.push('\n');
            }
            FileAction::Skipped => {
                out.push_str(&format!(
                    "  {} {:<9} {}\n",
                    "-".dimmed(),
                    "skipped".dimmed(),
                    file.path.display()
                ));
            }
            FileAction::Failed => {
                out.push_str(&format!(
                    "  {} {:<9} {}\n",
                    "✗".red().bold(),
                    "failed".red(),
                    file.path.display()
                ));
                if let Some(ref error) = file.error {
                    out.push_str(&format!("              {}\n", error.dimmed()));
                }
            }
        }
    }

    let (fixed, skipped, failed) = report.count_by_action();
    out.push('\n');
    out.push_str(&format!(
        "Done: {} file(s) {verb}, {} skipped, {} failed\n",
        fixed.to_string().bold(),
        skipped,
        if failed > 0 {
            failed.to_string().red().bold().to_string()
        } else {
            failed.to_string()
        },
    ));

    out
}
