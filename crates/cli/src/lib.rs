// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tglrs - command-line host for the tgl argument converters.
//!
//! Each `tgl` subcommand runs one converter from [`tgl_core`] on a single
//! value and prints the typed result, so conversions can be checked by hand
//! or from scripts.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definition of the global flags and subcommands
//! - [`Config`] - settings from `config.toml`
//! - [`JsonFileLookup`] - entity lookup over a JSON file, used by `tgl resolve`
//! - [`Error`] - error type and exit status mapping

mod cli;
mod commands;
mod output;

pub mod config;
pub mod error;
pub mod lookup;

pub use cli::{Cli, Command, DateTimeArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use lookup::JsonFileLookup;
pub use output::Report;

use tgl_core::{LookupFields, SystemClock};

/// Run a parsed command line, printing the result to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let format = cli.output;
    let report = execute(cli)?;
    report.write_to(format, &mut std::io::stdout().lock())
}

/// Load configuration and run the selected converter.
pub fn execute(cli: Cli) -> Result<Report> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = cli.datetime.apply(config.datetime);
    tracing::debug!(
        "timezone {}, day_first {}, year_first {}",
        settings.timezone,
        settings.day_first,
        settings.year_first
    );

    let clock = SystemClock;
    let report = match cli.command {
        Command::Datetime { value, allow_now } => {
            commands::datetime::datetime(&value, allow_now, &settings, &clock)?
        }
        Command::Duration { value, allow_now } => {
            commands::datetime::duration(&value, allow_now, &settings, &clock)?
        }
        Command::Set { value } => commands::set::set(&value)?,
        Command::Modifier { value } => commands::set::modifier(&value)?,
        Command::Fields {
            value,
            schema,
            default,
        } => commands::fields::fields(&value, &schema, default.as_deref())?,
        Command::Resolve {
            value,
            entities,
            kind,
            lookup,
        } => {
            let fields = match lookup {
                Some(spec) => spec.parse::<LookupFields>()?,
                None => config.lookup_fields()?,
            };
            let lookup = JsonFileLookup::load(&entities)?;
            commands::resolve::resolve(&value, &kind, fields, lookup)?
        }
    };
    Ok(report)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
