//! End-to-end tests running the castshot binary

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{castshot, fixture};

/// A row of the 12-column fixture screen with no content.
const BLANK_ROW: &str = "            ";

#[test]
fn latex_export_at_end_excludes_frame_on_duration() {
    // duration 3.0 equals the last frame time, so the final clear is not applied
    let expected = [
        "\\ansicolor{2}\\$\\normalcolor{} ls        \\\\\n",
        "a.txt {[}b{]}   \\\\\n",
        "\\color[RGB]{10, 20, 30}cost \\$5\\normalcolor{}     \\\\\n",
        BLANK_ROW,
        "\\\\\n",
    ]
    .concat();

    let (_home, mut cmd) = castshot();
    cmd.arg(fixture("demo_v1.cast"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn ansi_export_at_timestamp() {
    let expected = format!(
        "\x1b[38;5;2m$\x1b[0m ls        \n{0}\n{0}\n{0}\n",
        BLANK_ROW
    );

    let (_home, mut cmd) = castshot();
    cmd.args(["-f", "ansi", "-t", "1.0"])
        .arg(fixture("demo_v1.cast"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn height_limits_rows() {
    let (_home, mut cmd) = castshot();
    cmd.args(["-f", "ansi", "-n", "1"])
        .arg(fixture("demo_v1.cast"))
        .assert()
        .success()
        .stdout("\x1b[38;5;2m$\x1b[0m ls        \n");
}

#[test]
fn v3_recording_is_supported() {
    let (_home, mut cmd) = castshot();
    cmd.args(["-f", "ansi", "-t", "5"])
        .arg(fixture("demo_v3.cast"))
        .assert()
        .success()
        .stdout("hello   \n\x1b[38;5;1mworld\x1b[0m   \n");
}

#[test]
fn v3_default_export_includes_last_frame() {
    let (_home, mut cmd) = castshot();
    cmd.args(["-f", "ansi"])
        .arg(fixture("demo_v3.cast"))
        .assert()
        .success()
        .stdout("hello   \n\x1b[38;5;1mworld\x1b[0m   \n");
}

#[test]
fn writes_to_output_file() {
    let (_home, mut cmd) = castshot();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("snapshot.txt");
    cmd.args(["-f", "ansi", "-t", "0.1", "-o"])
        .arg(&out_path)
        .arg(fixture("demo_v3.cast"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "        \n        \n");
}

#[test]
fn config_file_selects_format() {
    let (home, mut cmd) = castshot();
    let config_path = home.path().join("custom.toml");
    fs::write(&config_path, "[export]\nformat = \"ansi\"\nheight = 1\n").unwrap();

    cmd.arg("--config")
        .arg(&config_path)
        .arg(fixture("demo_v3.cast"))
        .assert()
        .success()
        .stdout("hello   \n");
}

#[test]
fn verbose_reports_export_time_on_stderr() {
    let (_home, mut cmd) = castshot();
    cmd.args(["-v", "-f", "ansi"])
        .arg(fixture("demo_v3.cast"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported screen contents at time"));
}

#[test]
fn missing_file_fails() {
    let (_home, mut cmd) = castshot();
    cmd.arg("/nonexistent/session.cast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn invalid_recording_fails() {
    let (home, mut cmd) = castshot();
    let bad = home.path().join("bad.cast");
    fs::write(&bad, "{\"version\":1,\"width\":0,\"height\":2,\"stdout\":[]}").unwrap();
    cmd.arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid terminal size"));
}
