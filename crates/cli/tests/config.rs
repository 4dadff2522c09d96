// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn config_flag_sets_day_first() {
    let temp = TempDir::new().unwrap();
    let config = write_file(&temp, "config.toml", "[datetime]\nday_first = true\n");

    tgl()
        .args(["--config", &config, "datetime", "03/04/2026"])
        .assert()
        .success()
        .stdout("2026-04-03T00:00:00+00:00\n");
}

#[test]
fn config_from_env() {
    let temp = TempDir::new().unwrap();
    let config = write_file(&temp, "config.toml", "[resolve]\nfields = [\"name\"]\n");
    let entities = write_file(&temp, "projects.json", PROJECTS);

    tgl()
        .env("TGL_CONFIG", &config)
        .args(["resolve", "1", "--entities", &entities])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_fails() {
    tgl()
        .args(["--config", "/nonexistent/config.toml", "set", "a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_timezone_in_config() {
    let temp = TempDir::new().unwrap();
    let config = write_file(&temp, "config.toml", "[datetime]\ntimezone = \"Mars\"\n");

    tgl()
        .args(["--config", &config, "set", "a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid time zone 'Mars'"));
}

#[test]
fn invalid_timezone_flag_is_usage_error() {
    tgl()
        .args(["--timezone", "Mars", "set", "a"])
        .assert()
        .code(2);
}
