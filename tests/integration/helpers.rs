//! Shared helpers for integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// The binary with config lookup pointed at an empty directory, so a user's
/// own config file cannot change the results.
pub fn castshot() -> (TempDir, Command) {
    let home = TempDir::new().expect("create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_castshot"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    (home, cmd)
}
