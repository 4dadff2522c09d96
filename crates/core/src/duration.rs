// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compact duration shorthand such as `1d 2h 30m`.
//!
//! Supported units: `d` (days), `h` (hours), `m` (minutes), `s` (seconds),
//! case-insensitive, in any order, with optional whitespace between parts.
//!
//! A unit may appear more than once; only its last occurrence counts, so
//! `1h1m2h` is two hours and one minute.

use std::fmt;
use std::ops::Add;
use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use serde::Serialize;

// The unit letter must not run into another letter, so "1st" is not "1s".
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)(\d+)([dhms])") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// A duration kept as separate day/hour/minute/second components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct UnitDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl UnitDuration {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        UnitDuration {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Collapse the components into a single [`Duration`].
    ///
    /// Saturates instead of overflowing.
    pub fn to_duration(&self) -> Duration {
        Duration::try_days(self.days)
            .unwrap_or(Duration::MAX)
            .checked_add(&Duration::try_hours(self.hours).unwrap_or(Duration::MAX))
            .and_then(|d| d.checked_add(&Duration::try_minutes(self.minutes).unwrap_or(Duration::MAX)))
            .and_then(|d| d.checked_add(&Duration::try_seconds(self.seconds).unwrap_or(Duration::MAX)))
            .unwrap_or(Duration::MAX)
    }

    pub fn is_zero(&self) -> bool {
        *self == UnitDuration::default()
    }
}

impl Add for UnitDuration {
    type Output = UnitDuration;

    fn add(self, rhs: UnitDuration) -> UnitDuration {
        UnitDuration {
            days: self.days.saturating_add(rhs.days),
            hours: self.hours.saturating_add(rhs.hours),
            minutes: self.minutes.saturating_add(rhs.minutes),
            seconds: self.seconds.saturating_add(rhs.seconds),
        }
    }
}

impl fmt::Display for UnitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
            (self.seconds, 's'),
        ]
        .iter()
        .filter(|(n, _)| *n != 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect();

        if parts.is_empty() {
            write!(f, "0s")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// Fold every `<number><unit>` occurrence in `s` into a duration.
///
/// Returns `None` when nothing in the string looks like a duration, which
/// tells the caller to try parsing it as a date instead.
pub fn fold_duration(s: &str) -> Option<UnitDuration> {
    // Indexed d, h, m, s; later occurrences overwrite earlier ones.
    let mut slots: [Option<i64>; 4] = [None; 4];

    for caps in UNIT_RE.captures_iter(s) {
        let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let next = s[whole.end()..].chars().next();
        if next.is_some_and(|c| c.is_ascii_alphabetic()) {
            continue;
        }

        let Ok(value) = number.as_str().parse::<i64>() else {
            continue;
        };

        let slot = match unit.as_str().to_ascii_lowercase().as_str() {
            "d" => 0,
            "h" => 1,
            "m" => 2,
            "s" => 3,
            _ => continue,
        };
        if slots[slot].is_some() {
            tracing::trace!("duration unit '{}' repeated in '{}', keeping last", unit.as_str(), s);
        }
        slots[slot] = Some(value);
    }

    if slots.iter().all(Option::is_none) {
        return None;
    }

    let [days, hours, minutes, seconds] = slots.map(|v| v.unwrap_or(0));
    Some(UnitDuration::new(days, hours, minutes, seconds))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
