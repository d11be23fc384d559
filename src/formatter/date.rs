//! Date and time formatting

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use chrono_tz::Tz;

use crate::ast::{DatePart, DatePattern, PatternPart};
use crate::error::ConvertError;
use crate::locale::Locale;

impl DatePattern {
    /// Format an instant using this pattern, in the instant's own offset.
    pub fn format(&self, dt: &DateTime<FixedOffset>) -> String {
        self.format_with_locale(dt, &Locale::default())
    }

    /// Format an instant using this pattern and the given locale.
    pub fn format_with_locale(&self, dt: &DateTime<FixedOffset>, locale: &Locale) -> String {
        let mut result = String::new();

        for part in self.parts() {
            match part {
                PatternPart::Literal(s) => result.push_str(s),
                PatternPart::Field(date_part) => {
                    result.push_str(&format_date_part(*date_part, dt, locale));
                }
            }
        }

        result
    }
}

/// Convert an instant into the named IANA timezone.
pub(crate) fn to_timezone(
    dt: &DateTime<FixedOffset>,
    timezone: &str,
) -> Result<DateTime<FixedOffset>, ConvertError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ConvertError::UnknownTimezone(timezone.to_string()))?;
    Ok(dt.with_timezone(&tz).fixed_offset())
}

/// Format a single date/time part.
fn format_date_part(part: DatePart, dt: &DateTime<FixedOffset>, locale: &Locale) -> String {
    let month0 = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;

    match part {
        // Year formatting
        DatePart::Year => format!("{}", dt.year()),
        DatePart::Year2 => format!("{:02}", dt.year().rem_euclid(100)),
        DatePart::Year4 => format!("{:04}", dt.year()),
        DatePart::Quarter => format!("{}", dt.month0() / 3 + 1),
        DatePart::QuarterOrdinal => {
            let quarter = dt.month0() / 3 + 1;
            format!("{}{}", quarter, locale.ordinal_suffix(quarter))
        }

        // Month formatting
        DatePart::Month => format!("{}", dt.month()),
        DatePart::Month2 => format!("{:02}", dt.month()),
        DatePart::MonthOrdinal => {
            format!("{}{}", dt.month(), locale.ordinal_suffix(dt.month()))
        }
        DatePart::MonthAbbr => locale.month_names_short[month0].to_string(),
        DatePart::MonthFull => locale.month_names_full[month0].to_string(),

        // Day formatting
        DatePart::Day => format!("{}", dt.day()),
        DatePart::Day2 => format!("{:02}", dt.day()),
        DatePart::DayOrdinal => format!("{}{}", dt.day(), locale.ordinal_suffix(dt.day())),
        DatePart::DayOfYear => format!("{}", dt.ordinal()),
        DatePart::DayOfYearOrdinal => {
            format!("{}{}", dt.ordinal(), locale.ordinal_suffix(dt.ordinal()))
        }
        DatePart::DayOfYear3 => format!("{:03}", dt.ordinal()),

        // Weekday formatting
        DatePart::Weekday => format!("{}", weekday),
        DatePart::WeekdayOrdinal => {
            format!("{}{}", weekday, locale.ordinal_suffix(weekday as u32))
        }
        DatePart::WeekdayMin => locale.day_names_min[weekday].to_string(),
        DatePart::WeekdayShort => locale.day_names_short[weekday].to_string(),
        DatePart::WeekdayFull => locale.day_names_full[weekday].to_string(),
        DatePart::IsoWeekday => format!("{}", dt.weekday().number_from_monday()),

        // Hour formatting
        DatePart::Hour => format!("{}", dt.hour()),
        DatePart::Hour2 => format!("{:02}", dt.hour()),
        DatePart::Hour12 => format!("{}", to_12_hour(dt.hour())),
        DatePart::Hour12Two => format!("{:02}", to_12_hour(dt.hour())),
        DatePart::Hour24 => format!("{}", to_24_hour(dt.hour())),
        DatePart::Hour24Two => format!("{:02}", to_24_hour(dt.hour())),

        // Minute and second formatting
        DatePart::Minute => format!("{}", dt.minute()),
        DatePart::Minute2 => format!("{:02}", dt.minute()),
        DatePart::Second => format!("{}", dt.second()),
        DatePart::Second2 => format!("{:02}", dt.second()),
        DatePart::Fraction(places) => {
            // Leap seconds report nanos >= 1e9
            let nanos = dt.nanosecond() % 1_000_000_000;
            let divisor = 10_u32.pow(9 - places as u32);
            format!("{:0width$}", nanos / divisor, width = places as usize)
        }

        DatePart::AmPmUpper => format_ampm(dt.hour(), locale).to_uppercase(),
        DatePart::AmPmLower => format_ampm(dt.hour(), locale).to_lowercase(),

        DatePart::Offset => format_offset(dt.offset().local_minus_utc(), true),
        DatePart::OffsetCompact => format_offset(dt.offset().local_minus_utc(), false),

        DatePart::UnixSeconds => format!("{}", dt.timestamp()),
        DatePart::UnixMillis => format!("{}", dt.timestamp_millis()),
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
pub(crate) fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Convert 0-23 to the 1-24 clock: 0 -> 24.
fn to_24_hour(hour: u32) -> u32 {
    if hour == 0 {
        24
    } else {
        hour
    }
}

fn format_ampm(hour: u32, locale: &Locale) -> &'static str {
    if hour >= 12 {
        locale.pm_string
    } else {
        locale.am_string
    }
}

/// Format an offset in seconds as +HH:MM or +HHMM.
fn format_offset(seconds: i32, with_colon: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    let (h, m) = (minutes / 60, minutes % 60);
    if with_colon {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}{:02}", sign, h, m)
    }
}
