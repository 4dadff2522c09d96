// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::DateTimeArgs;

/// Output format for converted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tgl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert time-tracking command-line values into typed results")]
#[command(
    long_about = "Convert time-tracking command-line values into typed results.\n\n\
    Each subcommand runs one argument converter on VALUE and prints what it produced."
)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true, env = "TGL_CONFIG", value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub datetime: DateTimeArgs,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Log conversion decisions to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a date/time
    #[command(after_help = "\
Examples:
  tgl datetime 2026-03-01              Midnight, 1 March 2026
  tgl datetime \"5 Jan 2026 10:30\"      Date followed by a time
  tgl datetime 10pm                    Today at 22:00
  tgl datetime now --allow-now         The current instant")]
    Datetime {
        value: String,

        /// Accept "now" as the current instant
        #[arg(long)]
        allow_now: bool,
    },

    /// Parse a duration shorthand, falling back to a date/time
    #[command(after_help = "\
Examples:
  tgl duration 1h30m                   One hour thirty minutes
  tgl duration 2d5h                    Two days five hours
  tgl duration 1h2h                    Two hours (last occurrence wins)
  tgl duration tomorrow                Not a duration, parsed as a date")]
    Duration {
        value: String,

        /// Accept "now" when falling back to a date/time
        #[arg(long)]
        allow_now: bool,
    },

    /// Parse a comma-separated set
    Set {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Parse a set or a list of +/- modifiers
    #[command(after_help = "\
Examples:
  tgl modifier a,b                     Replace with {a, b}
  tgl modifier +a,-b                   Add a, remove b")]
    Modifier {
        /// The value; starts with '+' or '-' in diff mode
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Select fields from a schema
    #[command(after_help = "\
Examples:
  tgl fields id,name --schema id,name,email
  tgl fields +email,-id --schema id,name,email --default id,name")]
    Fields {
        /// Literal list, or +/- modifiers applied to the default
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Comma-separated list of valid field names
        #[arg(long, value_name = "fields")]
        schema: String,

        /// Default selection that modifiers apply to
        #[arg(long, value_name = "fields")]
        default: Option<String>,
    },

    /// Resolve an entity by id or name
    Resolve {
        /// Id or name; may be negative or start with '-'
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// JSON file holding an array of entity objects
        #[arg(long, value_name = "path")]
        entities: PathBuf,

        /// Entity name used in messages
        #[arg(long, default_value = "entity")]
        kind: String,

        /// Fields to try in order (defaults to the config's [resolve] fields)
        #[arg(long, value_name = "fields")]
        lookup: Option<String>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
