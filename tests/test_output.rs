use std::fs;
use std::path::Path;

use wxss_fix::config::Config;
use wxss_fix::output::{self, OutputFormat};
use wxss_fix::passes::compat::CompatPatcher;
use wxss_fix::report::PassReport;
use wxss_fix::runner::run_pass;

fn patched_report(root: &Path) -> PassReport {
    fs::write(root.join("fixed.wxss"), ".a { height: 100vh; }\n").unwrap();
    fs::write(root.join("plain.wxss"), ".b { color: red; }\n").unwrap();
    run_pass(root, &CompatPatcher, &Config::default(), false)
}

#[test]
fn json_output_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let report = patched_report(dir.path());
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert_eq!(parsed["pass"], "patch");
    assert_eq!(parsed["dry_run"], false);
    assert_eq!(parsed["succeeded"], true);
    assert_eq!(parsed["summary"]["fixed"], 1);
    assert_eq!(parsed["summary"]["skipped"], 1);
    assert_eq!(parsed["summary"]["failed"], 0);
    assert!(parsed["timestamp"].is_string());

    let files = parsed["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["action"], "fixed");
    assert_eq!(files[0]["rules_applied"][0], "patch/viewport-units");
    assert_eq!(files[1]["action"], "skipped");
    assert!(files[1]["error"].is_null());
}

#[test]
fn pretty_output_lists_every_file_and_a_summary() {
    let dir = tempfile::tempdir().unwrap();
    let report = patched_report(dir.path());
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("2 stylesheet(s)"));
    assert!(pretty.contains("✓"));
    assert!(pretty.contains("fixed.wxss"));
    assert!(pretty.contains("plain.wxss"));
    assert!(pretty.contains("skipped"));
    assert!(pretty.contains("patch/viewport-units"));
    assert!(pretty.contains("Done:"));
}

#[test]
fn pretty_output_marks_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.wxss"), "x: var(--a);\n").unwrap();
    let report = run_pass(dir.path(), &CompatPatcher, &Config::default(), true);
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("dry run"));
    assert!(pretty.contains("would fix"));
}
