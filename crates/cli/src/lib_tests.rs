// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for `execute()`: config loading, flag overrides and routing.
//!
//! Each test points `--config` at a temp file so the user's own config is
//! never read.

use super::*;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new(config: &str) -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), config).unwrap();
        Fixture { temp }
    }

    fn execute(&self, args: &[&str]) -> Result<Report> {
        let config = self.temp.path().join("config.toml");
        let mut argv = vec!["tgl", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        execute(Cli::try_parse_from(argv).unwrap())
    }

    fn write(&self, name: &str, content: &str) -> String {
        let path = self.temp.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }
}

#[test]
fn config_timezone_applies() {
    let fx = Fixture::new("[datetime]\ntimezone = \"+05:00\"\n");
    let report = fx.execute(&["datetime", "2026-01-02 03:04"]).unwrap();
    assert_eq!(report.text, "2026-01-02T03:04:00+05:00");
}

#[test]
fn flag_overrides_config_timezone() {
    let fx = Fixture::new("[datetime]\ntimezone = \"+05:00\"\n");
    let report = fx
        .execute(&["--timezone", "utc", "datetime", "2026-01-02 03:04"])
        .unwrap();
    assert_eq!(report.text, "2026-01-02T03:04:00+00:00");
}

#[test]
fn config_day_first_applies() {
    let fx = Fixture::new("[datetime]\ntimezone = \"utc\"\nday_first = true\n");
    let report = fx.execute(&["datetime", "03/04/2026"]).unwrap();
    assert_eq!(report.text, "2026-04-03T00:00:00+00:00");
}

#[test]
fn month_first_by_default() {
    let fx = Fixture::new("[datetime]\ntimezone = \"utc\"\n");
    let report = fx.execute(&["datetime", "03/04/2026"]).unwrap();
    assert_eq!(report.text, "2026-03-04T00:00:00+00:00");
}

#[test]
fn resolve_uses_config_fields() {
    let fx = Fixture::new("[resolve]\nfields = [\"name\"]\n");
    let entities = fx.write("p.json", r#"[{"id": 7, "name": "Site"}]"#);

    // Only names are tried, so the id does not resolve.
    let err = fx
        .execute(&["resolve", "7", "--entities", &entities, "--kind", "project"])
        .unwrap_err();
    assert!(err.to_string().contains("unknown project"));

    let report = fx
        .execute(&["resolve", "Site", "--entities", &entities])
        .unwrap();
    assert_eq!(report.json["id"], 7);
}

#[test]
fn resolve_lookup_flag_overrides_config() {
    let fx = Fixture::new("[resolve]\nfields = [\"name\"]\n");
    let entities = fx.write("p.json", r#"[{"id": 7, "name": "Site"}]"#);
    let report = fx
        .execute(&["resolve", "7", "--entities", &entities, "--lookup", "id"])
        .unwrap();
    assert_eq!(report.json["name"], "Site");
}

#[test]
fn empty_lookup_flag_is_setup_error() {
    let fx = Fixture::new("");
    let entities = fx.write("p.json", "[]");
    let err = fx
        .execute(&["resolve", "7", "--entities", &entities, "--lookup", " , "])
        .unwrap_err();
    assert!(matches!(err, Error::Setup(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn missing_entities_file_is_io_error() {
    let fx = Fixture::new("");
    let err = fx
        .execute(&["resolve", "7", "--entities", "/nonexistent/p.json"])
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_config_is_reported() {
    let fx = Fixture::new("[datetime\n");
    let err = fx.execute(&["set", "a"]).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn routes_set_and_fields() {
    let fx = Fixture::new("");
    assert_eq!(fx.execute(&["set", "b,a"]).unwrap().text, "a, b");
    assert_eq!(
        fx.execute(&["fields", "-b", "--schema", "a,b,c", "--default", "a,b"])
            .unwrap()
            .text,
        "a"
    );
}
