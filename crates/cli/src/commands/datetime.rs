// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::{json, Value};
use tgl_core::{
    Clock, Converter, DateTimeConverter, DateTimeOrDurationConverter, DateTimeSettings, Temporal,
};

use crate::error::Result;
use crate::output::Report;

use super::value_context;

pub fn datetime<C: Clock>(
    value: &str,
    allow_now: bool,
    settings: &DateTimeSettings,
    clock: &C,
) -> Result<Report> {
    let converter = DateTimeConverter::with_clock(*settings, clock).allow_now(allow_now);
    let instant = converter.convert(value, &value_context())?;
    let formatted = instant.to_rfc3339();
    Ok(Report::new(formatted.clone(), json!({ "value": formatted })))
}

/// Parse a duration, or a date/time when the value has no duration units.
///
/// Durations are also shown as the instant they reach from now.
pub fn duration<C: Clock>(
    value: &str,
    allow_now: bool,
    settings: &DateTimeSettings,
    clock: &C,
) -> Result<Report> {
    let converter = DateTimeOrDurationConverter::with_clock(*settings, clock).allow_now(allow_now);
    let temporal = converter.convert(value, &value_context())?;

    let now = settings.timezone.to_zone(clock.now());
    let resolved = temporal.resolve(now).map(|dt| dt.to_rfc3339());

    let text = match (&temporal, &resolved) {
        (Temporal::Duration(d), Some(until)) => format!("duration: {}\nuntil: {}", d, until),
        (Temporal::Duration(d), None) => format!("duration: {}", d),
        (Temporal::Instant(instant), _) => instant.to_rfc3339(),
    };

    let mut json = serde_json::to_value(temporal)?;
    if let Value::Object(map) = &mut json {
        map.insert(
            "resolved".to_string(),
            resolved.map(Value::String).unwrap_or(Value::Null),
        );
    }
    Ok(Report::new(text, json))
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
