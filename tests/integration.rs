use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn wxss_fix() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("wxss-fix")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn patch_defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/index/index.wxss", ".page {\n  height: 100vh;\n}\n");
    write(dir.path(), "app.wxss", ".app { color: #333; }\n");

    wxss_fix()
        .current_dir(dir.path())
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.wxss"))
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("Done:"));

    assert_eq!(
        read(dir.path(), "pages/index/index.wxss"),
        ".page {\n  height: 1334rpx /* was 100vh */;\n}\n"
    );
    assert_eq!(read(dir.path(), "app.wxss"), ".app { color: #333; }\n");
}

#[test]
fn patch_then_repair_closes_gap_wrapper() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app.wxss", ".row {\n  gap: 8px;\n}\n");

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(
        read(dir.path(), "app.wxss"),
        ".row {\n  /* gap: removed for compatibility */ /* gap: 8px;\n}\n"
    );

    wxss_fix()
        .args(["repair", dir.path().to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(
        read(dir.path(), "app.wxss"),
        ".row {\n  /* gap: 8px; removed for compatibility */\n}\n"
    );
}

#[test]
fn non_stylesheets_are_never_touched() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "page.css", "a { height: 100vh; gap: 1px; }\n");
    write(dir.path(), "page.wxml", "<view style=\"height: 100vh\"/>\n");

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 stylesheet(s)"));

    assert_eq!(read(dir.path(), "page.css"), "a { height: 100vh; gap: 1px; }\n");
    assert_eq!(read(dir.path(), "page.wxml"), "<view style=\"height: 100vh\"/>\n");
}

#[test]
fn ext_flag_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "page.css", "a { height: 50vh; }\n");

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap(), "--ext", ".css"])
        .assert()
        .success();

    assert_eq!(read(dir.path(), "page.css"), "a { height: 667rpx /* was 50vh */; }\n");
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app.wxss", "a { color: var(--fg); }\n");

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would fix"));

    assert_eq!(read(dir.path(), "app.wxss"), "a { color: var(--fg); }\n");
}

#[test]
fn json_format_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app.wxss", "input::placeholder { color: #999; }\n");

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fixed\": 1"))
        .stdout(predicate::str::contains("\"patch/placeholder\""));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "wxss-fix.toml", "[patch]\nexclude = [\"legacy_\"]\n");
    write(dir.path(), "legacy_page.wxss", "a { height: 50vh; }\n");
    write(dir.path(), "test_page.wxss", "a { height: 50vh; }\n");

    wxss_fix()
        .current_dir(dir.path())
        .arg("patch")
        .assert()
        .success();

    assert_eq!(read(dir.path(), "legacy_page.wxss"), "a { height: 50vh; }\n");
    assert_eq!(
        read(dir.path(), "test_page.wxss"),
        "a { height: 667rpx /* was 50vh */; }\n"
    );
}

#[test]
fn unreadable_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.wxss"), [0xc3, 0x28]).unwrap();

    wxss_fix()
        .args(["patch", dir.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad.wxss"));
}

#[test]
fn nonexistent_path_exits_2() {
    wxss_fix()
        .args(["patch", "tests/does-not-exist"])
        .assert()
        .code(2);
}

#[test]
fn missing_config_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    wxss_fix()
        .args([
            "repair",
            dir.path().to_str().unwrap(),
            "--config",
            "/definitely/not/here.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn list_rules_shows_rules() {
    wxss_fix()
        .args(["list-rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patch/viewport-units"))
        .stdout(predicate::str::contains("repair/double-close"))
        .stdout(predicate::str::contains("Total: 13 rules"));
}

#[test]
fn explain_known_rule() {
    wxss_fix()
        .args(["explain", "patch/gap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patch/gap"))
        .stdout(predicate::str::contains("/* gap: removed for compatibility */"));
}

#[test]
fn explain_unknown_rule_exits_2() {
    wxss_fix()
        .args(["explain", "nonexistent/rule"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule"));
}
