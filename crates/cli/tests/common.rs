// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `tgl` isolated from the user's config and log settings, pinned to UTC.
pub fn tgl() -> Command {
    let mut cmd = cargo_bin_cmd!("tgl");
    cmd.env_remove("TGL_CONFIG")
        .env_remove("TGL_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .env("HOME", "/nonexistent")
        .arg("--timezone")
        .arg("utc");
    cmd
}

/// Helper to write a file into a temp directory and return its path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> String {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

/// A small project collection with one duplicated name.
pub const PROJECTS: &str = r#"[
    {"id": 1, "name": "Website"},
    {"id": 2, "name": "Backend"},
    {"id": 3, "name": "Backend"},
    {"id": 4, "name": "1999"}
]"#;
