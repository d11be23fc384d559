//! Formatting a date and scanning it back with the same pattern.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use valfmt::{DatePattern, Formatter, ParseError, SettingsPatch};

fn sample() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 3, 14, 15, 9, 26)
        .unwrap()
}

#[test]
fn test_round_trip_full_pattern() {
    let pattern = DatePattern::parse("YYYY-MM-DD[T]HH:mm:ss.SSSZ").unwrap();
    let formatted = pattern.format(&sample());
    assert_eq!(formatted, "2026-03-14T15:09:26.000+02:00");
    assert_eq!(pattern.parse_datetime(&formatted).unwrap(), sample());
}

#[test]
fn test_round_trip_named_pattern() {
    let dt = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap().fixed_offset();
    let pattern = DatePattern::parse("dddd, MMMM Do YYYY h:mm:ss A").unwrap();
    let formatted = pattern.format(&dt);
    assert_eq!(formatted, "Saturday, March 14th 2026 3:09:26 PM");
    assert_eq!(pattern.parse_datetime(&formatted).unwrap(), dt);
}

#[test]
fn test_round_trip_unix_millis() {
    let pattern = DatePattern::parse("x").unwrap();
    let formatted = pattern.format(&sample());
    assert_eq!(pattern.parse_datetime(&formatted).unwrap(), sample());
}

#[test]
fn test_round_trip_through_formatter() {
    let dt = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
    let fmt = Formatter::default();
    let text = fmt.date_to_date_time_string(dt, true).unwrap();

    let pattern = DatePattern::parse(&fmt.settings().date_time_format).unwrap();
    assert_eq!(pattern.parse_datetime(&text).unwrap(), dt.fixed_offset());
}

#[test]
fn test_round_trip_day_of_year() {
    let dt = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap().fixed_offset();
    let pattern = DatePattern::parse("YYYY-DDDD").unwrap();
    assert_eq!(pattern.format(&dt), "2024-366");
    assert_eq!(pattern.parse_datetime("2024-366").unwrap(), dt);
}

#[test]
fn test_ambiguous_pattern_fails_probe() {
    // January 19th prints as "119"; scanning reads month 11 and day 9
    let probe = Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(
        DatePattern::validate_strict_at("MD", &probe),
        Err(ParseError::NotRoundTrip)
    );

    let probe = Utc.with_ymd_and_hms(2026, 11, 19, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(DatePattern::validate_strict_at("MD", &probe), Ok(()));
}

#[test]
fn test_rejected_pattern_is_not_applied() {
    let mut fmt = Formatter::default();
    assert!(fmt
        .set_settings(SettingsPatch::new().date_format("YYYY-MM-DD hh:mm Q"))
        .is_ok());
    assert!(fmt
        .set_settings(SettingsPatch::new().date_format("YYYY-MM-DD hh:mm [Q"))
        .is_err());
    assert_eq!(fmt.settings().date_format, "YYYY-MM-DD hh:mm Q");
}

#[test]
fn test_ordinal_patterns_are_strict() {
    let mut fmt = Formatter::default();
    fmt.set_settings(SettingsPatch::new().date_format("Qo [quarter], DDDo [day], do [weekday]"))
        .unwrap();
    assert_eq!(
        fmt.settings().date_format,
        "Qo [quarter], DDDo [day], do [weekday]"
    );

    let dt = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
    assert_eq!(
        fmt.date_to_date_string(dt).unwrap(),
        "1st quarter, 73rd day, 6th weekday"
    );
}

#[test]
fn test_round_trip_ordinals() {
    let pattern = DatePattern::parse("YYYY DDDo").unwrap();
    let dt = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(pattern.format(&dt), "2026 73rd");
    assert_eq!(pattern.parse_datetime("2026 73rd").unwrap(), dt);
}
