// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so the same overrides
//! are available on every subcommand.

use clap::Args;
use tgl_core::{DateTimeSettings, TimeZoneSetting};

/// Date parsing overrides for the values in `config.toml`.
#[derive(Args, Clone, Debug, Default)]
pub struct DateTimeArgs {
    /// Time zone for values without an offset ("local", "utc", "+02:00")
    #[arg(long, global = true, value_name = "zone")]
    pub timezone: Option<TimeZoneSetting>,

    /// Read ambiguous numeric dates as day first (25/12/2026)
    #[arg(long, global = true, conflicts_with = "year_first")]
    pub day_first: bool,

    /// Read ambiguous numeric dates as year first (26/12/25)
    #[arg(long, global = true)]
    pub year_first: bool,
}

impl DateTimeArgs {
    /// Apply the flags on top of configured settings.
    pub fn apply(&self, mut settings: DateTimeSettings) -> DateTimeSettings {
        if let Some(zone) = self.timezone {
            settings.timezone = zone;
        }
        if self.day_first {
            settings.day_first = true;
            settings.year_first = false;
        }
        if self.year_first {
            settings.year_first = true;
            settings.day_first = false;
        }
        settings
    }
}
