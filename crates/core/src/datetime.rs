// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort date/time parsing for command-line arguments.
//!
//! Accepted input, tried in this order:
//!
//! - `now` (only where the caller allows it)
//! - `today`, `tomorrow`, `yesterday` (midnight in the configured zone)
//! - RFC 3339 / RFC 2822 timestamps carrying their own offset
//! - dates such as `2024-01-05`, `05/01/2024`, `5 Jan 2024`, `5th May 2024`,
//!   `05-Jan-2024`, `January 5, 2024` or `20240105`, optionally followed by a
//!   time (`10:30`, `10:30:15`, `10pm`, or `T103000` after a basic date)
//! - a bare time, meaning that time today
//!
//! Numeric dates are read in the order selected by [`DateTimeSettings`]:
//! year-first, then day-first, then month-first. With both flags set a
//! two-digit date such as `24/01/02` is read year-day-month. When the preferred order
//! yields an impossible date the remaining orders are tried.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::config::DateTimeSettings;
use crate::convert::{Converter, ParamContext};
use crate::duration::{fold_duration, UnitDuration};
use crate::error::{ConversionError, ConversionErrorKind, Result};

/// The reserved literal for the current instant.
pub const NOW_LITERAL: &str = "now";

const MONTH_NAME_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%a %d %B %Y",
    "%a, %d %B %Y",
    "%d-%b-%Y",
];

/// Times written without separators, as in `20240105T103000`.
const BASIC_TIME_FORMATS: &[&str] = &["%H%M%S", "%H%M"];

// Day ordinals such as "5th" or "22nd".
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M%p",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// Result of parsing an argument that accepts either a date or a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Temporal {
    Duration(UnitDuration),
    Instant(DateTime<FixedOffset>),
}

impl Temporal {
    /// Turn the value into an absolute instant, measuring a duration from
    /// `reference`.
    ///
    /// Returns `None` if the duration pushes the result out of range.
    pub fn resolve(&self, reference: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        match self {
            Temporal::Instant(instant) => Some(*instant),
            Temporal::Duration(duration) => reference.checked_add_signed(duration.to_duration()),
        }
    }
}

/// Parse a date/time argument.
///
/// # Errors
///
/// Fails if the input is `now` while `allow_now` is false, or if no supported
/// format matches.
pub fn parse_datetime<C: Clock>(
    raw: &str,
    settings: &DateTimeSettings,
    allow_now: bool,
    clock: &C,
) -> Result<DateTime<FixedOffset>> {
    let input = raw.trim();

    if input.eq_ignore_ascii_case(NOW_LITERAL) {
        if !allow_now {
            return Err(ConversionErrorKind::NowNotAllowed);
        }
        return Ok(settings.timezone.to_zone(clock.now()));
    }

    parse_natural(input, settings, clock)
        .ok_or_else(|| ConversionErrorKind::UnknownDateTime(raw.to_string()))
}

/// Parse an argument that may be a duration shorthand or a date/time.
///
/// Duration syntax wins whenever it matches anywhere in the input; otherwise
/// this behaves like [`parse_datetime`].
pub fn parse_datetime_or_duration<C: Clock>(
    raw: &str,
    settings: &DateTimeSettings,
    allow_now: bool,
    clock: &C,
) -> Result<Temporal> {
    if let Some(duration) = fold_duration(raw) {
        return Ok(Temporal::Duration(duration));
    }

    tracing::debug!("'{}' is not a duration, parsing as datetime", raw);
    parse_datetime(raw, settings, allow_now, clock).map(Temporal::Instant)
}

fn parse_natural<C: Clock>(
    input: &str,
    settings: &DateTimeSettings,
    clock: &C,
) -> Option<DateTime<FixedOffset>> {
    let today = settings.timezone.to_zone(clock.now()).date_naive();

    if let Some(date) = relative_day(input, today) {
        return settings.timezone.localize(date.and_time(NaiveTime::MIN));
    }

    if let Some(dt) = parse_with_offset(input) {
        return Some(dt);
    }

    let naive = parse_naive(input, settings, today)?;
    settings.timezone.localize(naive)
}

fn relative_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_signed(Duration::days(1)),
        "yesterday" => today.checked_sub_signed(Duration::days(1)),
        _ => None,
    }
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt);
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
}

fn parse_naive(input: &str, settings: &DateTimeSettings, today: NaiveDate) -> Option<NaiveDateTime> {
    if let Some(date) = parse_date(input, settings) {
        return Some(date.and_time(NaiveTime::MIN));
    }

    if let Some(time) = parse_time(input) {
        return Some(today.and_time(time));
    }

    // Try every split point between a date part and a time part, rightmost first.
    let bytes = input.as_bytes();
    for (idx, ch) in input.char_indices().rev() {
        let is_separator = ch.is_whitespace()
            || (ch == 'T' && idx > 0 && bytes[idx - 1].is_ascii_digit());
        if !is_separator {
            continue;
        }
        let (date_part, time_part) = (input[..idx].trim(), input[idx + ch.len_utf8()..].trim());
        if date_part.is_empty() || time_part.is_empty() {
            continue;
        }
        let Some(date) = parse_date(date_part, settings) else {
            continue;
        };
        let mut time = parse_time(time_part);
        if time.is_none() && ch == 'T' {
            time = BASIC_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(time_part, fmt).ok());
        }
        if let Some(time) = time {
            return Some(date.and_time(time));
        }
    }

    None
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(input, fmt).ok())
        .or_else(|| parse_hour_meridiem(input))
}

/// Parse an hour with an am/pm marker and no minutes, e.g. `10pm` or `7 AM`.
fn parse_hour_meridiem(input: &str) -> Option<NaiveTime> {
    let lower = input.to_lowercase();
    let (hour, pm) = if let Some(h) = lower.strip_suffix("pm") {
        (h, true)
    } else {
        (lower.strip_suffix("am")?, false)
    };
    let hour: u32 = hour.trim().parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    NaiveTime::from_hms_opt(hour % 12 + if pm { 12 } else { 0 }, 0, 0)
}

fn parse_date(input: &str, settings: &DateTimeSettings) -> Option<NaiveDate> {
    if let Some(date) = parse_numeric_date(input, settings).or_else(|| parse_basic_date(input)) {
        return Some(date);
    }
    let cleaned = ORDINAL_RE.replace_all(input, "${1}");
    MONTH_NAME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
}

/// Parse an ISO 8601 basic date, `YYYYMMDD`.
fn parse_basic_date(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(
        input[..4].parse().ok()?,
        input[4..6].parse().ok()?,
        input[6..].parse().ok()?,
    )
}

#[derive(Clone, Copy)]
enum FieldOrder {
    YearMonthDay,
    YearDayMonth,
    DayMonthYear,
    MonthDayYear,
}

/// Parse `a-b-c`, `a/b/c` or `a.b.c` where every part is numeric.
fn parse_numeric_date(input: &str, settings: &DateTimeSettings) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split(['-', '/', '.']).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || p.len() > 4 || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let orders: &[FieldOrder] = if parts[0].len() == 4 {
        &[FieldOrder::YearMonthDay]
    } else if parts[2].len() == 4 {
        if settings.day_first {
            &[FieldOrder::DayMonthYear, FieldOrder::MonthDayYear]
        } else {
            &[FieldOrder::MonthDayYear, FieldOrder::DayMonthYear]
        }
    } else if settings.year_first && settings.day_first {
        &[
            FieldOrder::YearDayMonth,
            FieldOrder::YearMonthDay,
            FieldOrder::DayMonthYear,
            FieldOrder::MonthDayYear,
        ]
    } else if settings.year_first {
        &[FieldOrder::YearMonthDay, FieldOrder::DayMonthYear, FieldOrder::MonthDayYear]
    } else if settings.day_first {
        &[FieldOrder::DayMonthYear, FieldOrder::MonthDayYear, FieldOrder::YearMonthDay]
    } else {
        &[FieldOrder::MonthDayYear, FieldOrder::DayMonthYear, FieldOrder::YearMonthDay]
    };

    orders.iter().find_map(|order| {
        let (y, m, d) = match order {
            FieldOrder::YearMonthDay => (parts[0], parts[1], parts[2]),
            FieldOrder::YearDayMonth => (parts[0], parts[2], parts[1]),
            FieldOrder::DayMonthYear => (parts[2], parts[1], parts[0]),
            FieldOrder::MonthDayYear => (parts[2], parts[0], parts[1]),
        };
        NaiveDate::from_ymd_opt(expand_year(y)?, m.parse().ok()?, d.parse().ok()?)
    })
}

/// Two-digit years pivot like `%y`: 69-99 are 19xx, 00-68 are 20xx.
fn expand_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    match s.len() {
        1 | 2 if year >= 69 => Some(1900 + year),
        1 | 2 => Some(2000 + year),
        _ => Some(year),
    }
}

/// Converts an argument into an absolute date/time.
#[derive(Debug, Clone)]
pub struct DateTimeConverter<C = SystemClock> {
    settings: DateTimeSettings,
    allow_now: bool,
    clock: C,
}

impl DateTimeConverter<SystemClock> {
    pub fn new(settings: DateTimeSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> DateTimeConverter<C> {
    pub fn with_clock(settings: DateTimeSettings, clock: C) -> Self {
        DateTimeConverter {
            settings,
            allow_now: false,
            clock,
        }
    }

    /// Permit the `now` literal.
    pub fn allow_now(mut self, allow: bool) -> Self {
        self.allow_now = allow;
        self
    }
}

impl<C: Clock> Converter for DateTimeConverter<C> {
    type Value = DateTime<FixedOffset>;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        parse_datetime(raw, &self.settings, self.allow_now, &self.clock).map_err(|kind| ctx.fail(raw, kind))
    }
}

/// Converts an argument into either a duration or an absolute date/time.
#[derive(Debug, Clone)]
pub struct DateTimeOrDurationConverter<C = SystemClock> {
    inner: DateTimeConverter<C>,
}

impl DateTimeOrDurationConverter<SystemClock> {
    pub fn new(settings: DateTimeSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> DateTimeOrDurationConverter<C> {
    pub fn with_clock(settings: DateTimeSettings, clock: C) -> Self {
        DateTimeOrDurationConverter {
            inner: DateTimeConverter::with_clock(settings, clock),
        }
    }

    pub fn allow_now(mut self, allow: bool) -> Self {
        self.inner = self.inner.allow_now(allow);
        self
    }
}

impl<C: Clock> Converter for DateTimeOrDurationConverter<C> {
    type Value = Temporal;

    fn convert(&self, raw: &str, ctx: &ParamContext) -> std::result::Result<Self::Value, ConversionError> {
        let inner = &self.inner;
        parse_datetime_or_duration(raw, &inner.settings, inner.allow_now, &inner.clock)
            .map_err(|kind| ctx.fail(raw, kind))
    }
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
