//! # EduCírculos CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to use them.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get EduCírculos Command (`edu_cmd`)
///
/// An `assert_cmd::Command` for the compiled `educirculos` binary, with the
/// environment overrides that would leak into tests removed. `HOME` and
/// `XDG_CONFIG_HOME` point at a directory that does not exist, so the
/// developer's own user configuration is never loaded.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn edu_cmd() -> Command {
    edu_cmd_with_home(&std::env::temp_dir().join("educirculos-tests-no-home"))
}

/// Like `edu_cmd`, but with `home` as `HOME` and `home/.config` as
/// `XDG_CONFIG_HOME`.
pub fn edu_cmd_with_home(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("educirculos").expect("Failed to find educirculos binary for testing");
    cmd.env_remove("EDUCIRCULOS_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Path of the user configuration file under `home`, matching where the
/// binary looks on Linux.
pub fn user_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("educirculos").join("config.toml")
}

/// Writes `content` to `<dir>/<name>` and returns the path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test configuration");
    path
}
