//! Output formatting for pass reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! Use [`format_report`] to render a [`PassReport`] in either format.

pub mod json;
pub mod pretty;

use crate::report::PassReport;

/// Supported output formats for pass reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// One colored line per file plus a summary line.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Formats a [`PassReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use wxss_fix::output::{format_report, OutputFormat};
/// # use wxss_fix::report::PassReport;
/// # fn example(report: &PassReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &PassReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
    }
}
