// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::TimeZoneSetting;
use chrono::TimeZone;
use yare::parameterized;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap())
}

fn utc() -> DateTimeSettings {
    DateTimeSettings {
        timezone: TimeZoneSetting::Utc,
        ..DateTimeSettings::default()
    }
}

fn rfc3339(raw: &str, settings: &DateTimeSettings) -> String {
    parse_datetime(raw, settings, false, &clock()).unwrap().to_rfc3339()
}

// ─────────────────────────────────────────────────────────────────────────────
// The "now" literal
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_rejected_when_not_allowed() {
    let err = parse_datetime("now", &utc(), false, &clock()).unwrap_err();
    assert!(matches!(err, ConversionErrorKind::NowNotAllowed));
}

#[test]
fn now_returns_clock_instant_when_allowed() {
    let dt = parse_datetime("now", &utc(), true, &clock()).unwrap();
    assert_eq!(dt, clock().0);
}

#[test]
fn now_is_expressed_in_configured_zone() {
    let settings = DateTimeSettings {
        timezone: "+02:00".parse().unwrap(),
        ..DateTimeSettings::default()
    };
    let dt = parse_datetime("now", &settings, true, &clock()).unwrap();
    assert_eq!(dt.to_rfc3339(), "2024-03-15T16:30:00+02:00");
}

#[test]
fn now_rejected_in_duration_context_too() {
    let err = parse_datetime_or_duration("now", &utc(), false, &clock()).unwrap_err();
    assert!(matches!(err, ConversionErrorKind::NowNotAllowed));
}

// ─────────────────────────────────────────────────────────────────────────────
// Formats
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    iso_date = { "2024-01-05", "2024-01-05T00:00:00+00:00" },
    iso_datetime = { "2024-01-05 10:30", "2024-01-05T10:30:00+00:00" },
    iso_t_separator = { "2024-01-05T10:30:15", "2024-01-05T10:30:15+00:00" },
    rfc3339_offset = { "2024-01-05T10:30:00+02:00", "2024-01-05T10:30:00+02:00" },
    rfc3339_zulu = { "2024-01-05T10:30:00Z", "2024-01-05T10:30:00+00:00" },
    rfc2822 = { "Fri, 05 Jan 2024 10:30:00 +0100", "2024-01-05T10:30:00+01:00" },
    space_offset = { "2024-01-05 10:30:00 +0100", "2024-01-05T10:30:00+01:00" },
    day_month_name = { "5 Jan 2024", "2024-01-05T00:00:00+00:00" },
    month_name_day = { "January 5, 2024", "2024-01-05T00:00:00+00:00" },
    month_name_time = { "Jan 5 2024 10:30 pm", "2024-01-05T22:30:00+00:00" },
    ordinal_day = { "5th May 2024", "2024-05-05T00:00:00+00:00" },
    ordinal_month_first = { "May 22nd, 2024 10:30", "2024-05-22T10:30:00+00:00" },
    dashed_month_abbrev = { "05-Jan-2024", "2024-01-05T00:00:00+00:00" },
    dashed_month_name = { "05-January-2024", "2024-01-05T00:00:00+00:00" },
    basic_date = { "20240105", "2024-01-05T00:00:00+00:00" },
    basic_datetime = { "20240105T103000", "2024-01-05T10:30:00+00:00" },
    hour_meridiem = { "2024-01-05 7am", "2024-01-05T07:00:00+00:00" },
    noon_meridiem = { "2024-01-05 12pm", "2024-01-05T12:00:00+00:00" },
    bare_time = { "09:15", "2024-03-15T09:15:00+00:00" },
    today = { "today", "2024-03-15T00:00:00+00:00" },
    tomorrow = { "tomorrow", "2024-03-16T00:00:00+00:00" },
    yesterday = { "Yesterday", "2024-03-14T00:00:00+00:00" },
    padded = { "  2024-01-05  ", "2024-01-05T00:00:00+00:00" },
)]
fn parses_format(input: &str, expected: &str) {
    assert_eq!(rfc3339(input, &utc()), expected);
}

#[parameterized(
    gibberish = { "not a date" },
    empty = { "" },
    bad_month = { "2024-13-01" },
    bad_time = { "2024-01-05 25:00" },
    half_date = { "2024-01" },
)]
fn rejects_unknown_format(input: &str) {
    let err = parse_datetime(input, &utc(), false, &clock()).unwrap_err();
    assert!(matches!(err, ConversionErrorKind::UnknownDateTime(ref raw) if raw == input));
    assert!(err.to_string().contains("unknown datetime format"));
}

#[test]
fn naive_input_uses_configured_zone() {
    let settings = DateTimeSettings {
        timezone: "-05:00".parse().unwrap(),
        ..DateTimeSettings::default()
    };
    assert_eq!(rfc3339("2024-01-05 10:00", &settings), "2024-01-05T10:00:00-05:00");
}

#[test]
fn explicit_offset_beats_configured_zone() {
    let settings = DateTimeSettings {
        timezone: "-05:00".parse().unwrap(),
        ..DateTimeSettings::default()
    };
    assert_eq!(
        rfc3339("2024-01-05T10:00:00+01:00", &settings),
        "2024-01-05T10:00:00+01:00"
    );
}

#[test]
fn relative_days_follow_configured_zone() {
    // 14:30 UTC is already the next day at +12:00.
    let settings = DateTimeSettings {
        timezone: "+12:00".parse().unwrap(),
        ..DateTimeSettings::default()
    };
    assert_eq!(rfc3339("today", &settings), "2024-03-16T00:00:00+12:00");
}

// ─────────────────────────────────────────────────────────────────────────────
// Day-first / year-first hints
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    month_first_default = { "01/02/2024", false, false, "2024-01-02" },
    day_first = { "01/02/2024", true, false, "2024-02-01" },
    day_first_dots = { "01.02.2024", true, false, "2024-02-01" },
    month_first_swaps_impossible = { "25/02/2024", false, false, "2024-02-25" },
    day_first_swaps_impossible = { "02/25/2024", true, false, "2024-02-25" },
    year_first_short = { "24/01/02", false, true, "2024-01-02" },
    year_day_month_with_both_flags = { "24/01/02", true, true, "2024-02-01" },
    year_day_month_falls_back = { "24/01/25", true, true, "2024-01-25" },
    short_year_month_first = { "01/02/24", false, false, "2024-01-02" },
    short_year_day_first = { "01/02/24", true, false, "2024-02-01" },
    old_century = { "01/02/99", false, false, "1999-01-02" },
    four_digit_year_first_ignores_flags = { "2024/01/02", true, false, "2024-01-02" },
)]
fn numeric_date_order(input: &str, day_first: bool, year_first: bool, expected: &str) {
    let settings = DateTimeSettings {
        timezone: TimeZoneSetting::Utc,
        day_first,
        year_first,
    };
    let dt = parse_datetime(input, &settings, false, &clock()).unwrap();
    assert_eq!(dt.date_naive().to_string(), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Duration fallback
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn duration_syntax_wins() {
    let value = parse_datetime_or_duration("1h 30m", &utc(), false, &clock()).unwrap();
    assert_eq!(value, Temporal::Duration(UnitDuration::new(0, 1, 30, 0)));
}

#[test]
fn non_duration_falls_back_to_datetime() {
    let value = parse_datetime_or_duration("tomorrow", &utc(), false, &clock()).unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(value, Temporal::Instant(expected));
}

#[test]
fn fallback_failure_reports_unknown_format() {
    let err = parse_datetime_or_duration("whenever", &utc(), true, &clock()).unwrap_err();
    assert!(matches!(err, ConversionErrorKind::UnknownDateTime(_)));
}

#[test]
fn resolve_duration_from_reference() {
    let reference = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap().fixed_offset();
    let value = Temporal::Duration(UnitDuration::new(0, 2, 15, 0));
    let resolved = value.resolve(reference).unwrap();
    assert_eq!(resolved.to_rfc3339(), "2024-01-01T11:15:00+00:00");
}

#[test]
fn resolve_instant_ignores_reference() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap().fixed_offset();
    let reference = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(Temporal::Instant(instant).resolve(reference), Some(instant));
}

#[test]
fn temporal_serializes_tagged() {
    let json = serde_json::to_value(Temporal::Duration(UnitDuration::new(0, 1, 0, 0))).unwrap();
    assert_eq!(json["kind"], "duration");
    assert_eq!(json["value"]["hours"], 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Converters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn converter_disallows_now_by_default() {
    let converter = DateTimeConverter::with_clock(utc(), clock());
    let err = converter.convert("now", &ParamContext::new("--start")).unwrap_err();
    assert_eq!(err.param, "--start");
    assert_eq!(err.value, "now");
    assert!(matches!(err.kind, ConversionErrorKind::NowNotAllowed));
}

#[test]
fn converter_allows_now_when_enabled() {
    let converter = DateTimeConverter::with_clock(utc(), clock()).allow_now(true);
    let dt = converter.convert("now", &ParamContext::new("--start")).unwrap();
    assert_eq!(dt, clock().0);
}

#[test]
fn duration_converter_returns_either_shape() {
    let converter = DateTimeOrDurationConverter::with_clock(utc(), clock());
    let ctx = ParamContext::new("--stop");
    assert!(matches!(converter.convert("45m", &ctx).unwrap(), Temporal::Duration(_)));
    assert!(matches!(converter.convert("2024-01-05", &ctx).unwrap(), Temporal::Instant(_)));
    assert_eq!(converter.convert("soonish", &ctx).unwrap_err().param, "--stop");
}
