// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ambient settings consulted by the date/time converters.
//!
//! These are plain values handed to converters at construction time; loading
//! them from disk is the host's job.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Time zone used to interpret naive date/time input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// The system's local zone.
    #[default]
    Local,
    Utc,
    /// A fixed offset from UTC such as `+02:00`.
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Interpret a wall-clock time in this zone.
    ///
    /// Returns `None` for times skipped by a DST transition. Times repeated by
    /// a transition resolve to the earlier instant.
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeZoneSetting::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            TimeZoneSetting::Utc => Some(Utc.from_utc_datetime(&naive).fixed_offset()),
            TimeZoneSetting::Fixed(offset) => offset.from_local_datetime(&naive).single(),
        }
    }

    /// Express an instant in this zone.
    pub fn to_zone(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            TimeZoneSetting::Local => instant.with_timezone(&Local).fixed_offset(),
            TimeZoneSetting::Utc => instant.fixed_offset(),
            TimeZoneSetting::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Utc => write!(f, "utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" | "gmt" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }
        parse_offset(trimmed)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| SetupError::InvalidTimeZone(s.to_string()))
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = SetupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}

/// Parse `+HH`, `+HHMM` or `+HH:MM` (and the `-` forms).
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Hints for interpreting ambiguous date input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeSettings {
    pub timezone: TimeZoneSetting,
    /// Read `01/02/2024` as 1 February.
    pub day_first: bool,
    /// Read `24/01/02` as 2024-01-02.
    pub year_first: bool,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
