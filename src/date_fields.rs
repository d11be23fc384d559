//! Strict scanning of formatted dates back into their fields.
//!
//! Scanning is the inverse of [`DatePattern::format`]. Each field is read with
//! chrono's own parser (`chrono::format::parse_and_remainder`, one item at a
//! time) into a [`Parsed`], which also detects conflicting values. Ordinals,
//! two-letter weekday names, the 1-24 hour clock, fixed fractional digits and
//! signed Unix timestamps have no chrono item and are read here, then stored
//! through the same `Parsed` setters.
//!
//! Scanning is stricter than chrono on its own: padded fields must carry
//! their full width, no whitespace is skipped and no input may be left over.
//! Month, weekday and AM/PM names are read in English.

use chrono::format::{self, Fixed, Item, Numeric, Pad, ParseErrorKind, ParseResult, Parsed};
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

use crate::ast::{DatePart, DatePattern, PatternPart};
use crate::error::ParseError;
use crate::formatter::to_12_hour;
use crate::locale::Locale;

static SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Fields read from a formatted date.
///
/// Only the fields named by the pattern are set; see [`Parsed`] for the
/// individual getters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFields {
    parsed: Parsed,
}

impl DatePattern {
    /// Strictly scan `input` against this pattern.
    pub fn scan(&self, input: &str) -> Result<DateFields, ParseError> {
        let mut scanner = Scanner::new(input);

        for part in self.parts() {
            match part {
                PatternPart::Literal(text) => scanner.literal(text)?,
                PatternPart::Field(date_part) => scanner.field(*date_part)?,
            }
        }

        if !scanner.rest.is_empty() {
            return Err(ParseError::TrailingInput {
                position: scanner.position(),
            });
        }

        Ok(DateFields {
            parsed: scanner.parsed,
        })
    }

    /// Strictly scan `input` and resolve it into an instant.
    pub fn parse_datetime(&self, input: &str) -> Result<DateTime<FixedOffset>, ParseError> {
        self.scan(input)?.resolve()
    }

    /// Check that `pattern` is a legal strict pattern.
    ///
    /// The pattern must compile, and formatting the current instant with it
    /// must scan back into the same field values.
    pub fn validate_strict(pattern: &str) -> Result<(), ParseError> {
        Self::validate_strict_at(pattern, &Utc::now().fixed_offset())
    }

    /// Like [`DatePattern::validate_strict`], probing with a given instant.
    pub fn validate_strict_at(
        pattern: &str,
        probe: &DateTime<FixedOffset>,
    ) -> Result<(), ParseError> {
        let compiled = crate::cache::get_or_parse(pattern)?;
        let scanned = compiled.scan(&compiled.format(probe))?;
        let expected = DateFields::from_instant(&compiled, probe)?;
        if scanned == expected {
            Ok(())
        } else {
            Err(ParseError::NotRoundTrip)
        }
    }

    /// Returns true if `pattern` is a legal strict pattern.
    pub fn is_strict(pattern: &str) -> bool {
        Self::validate_strict(pattern).is_ok()
    }
}

impl DateFields {
    /// The fields `pattern` would carry for `dt`, as scanning its output would record them.
    pub fn from_instant(
        pattern: &DatePattern,
        dt: &DateTime<FixedOffset>,
    ) -> Result<DateFields, ParseError> {
        let mut parsed = Parsed::new();
        for part in pattern.fields() {
            record(&mut parsed, part, dt).map_err(|_| ParseError::NotRoundTrip)?;
        }
        Ok(DateFields { parsed })
    }

    /// Returns the underlying chrono fields.
    pub fn as_parsed(&self) -> &Parsed {
        &self.parsed
    }

    pub fn into_parsed(self) -> Parsed {
        self.parsed
    }

    /// Resolve the fields into an instant.
    ///
    /// A Unix timestamp is checked against every other field. Otherwise
    /// missing date fields default to 1970-01-01 (a quarter selects its first
    /// month), missing time fields to midnight and a missing offset to UTC.
    /// Fields that contradict each other, such as a weekday that does not
    /// fall on the resolved date, are [`ParseError::Unresolvable`].
    pub fn resolve(&self) -> Result<DateTime<FixedOffset>, ParseError> {
        let mut parsed = self.parsed.clone();
        if parsed.timestamp().is_none() {
            fill_defaults(&mut parsed).map_err(ParseError::Unresolvable)?;
        }
        parsed.to_datetime().map_err(ParseError::Unresolvable)
    }
}

fn fill_defaults(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.year().is_none()
        && parsed.year_div_100().is_none()
        && parsed.year_mod_100().is_none()
    {
        parsed.set_year(1970)?;
    }
    if parsed.ordinal().is_none() {
        if parsed.month().is_none() {
            let month = parsed.quarter().map_or(1, |q| (q - 1) * 3 + 1);
            parsed.set_month(i64::from(month))?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }
    if parsed.offset().is_none() {
        parsed.set_offset(0)?;
    }
    Ok(())
}

/// Stores the value `part` shows for `dt`, through the setter scanning uses.
fn record(parsed: &mut Parsed, part: DatePart, dt: &DateTime<FixedOffset>) -> ParseResult<()> {
    match part {
        DatePart::Year | DatePart::Year4 => parsed.set_year(i64::from(dt.year())),
        DatePart::Year2 => parsed.set_year_mod_100(i64::from(dt.year().rem_euclid(100))),
        DatePart::Quarter | DatePart::QuarterOrdinal => {
            parsed.set_quarter(i64::from(dt.month0() / 3 + 1))
        }
        DatePart::Month
        | DatePart::Month2
        | DatePart::MonthOrdinal
        | DatePart::MonthAbbr
        | DatePart::MonthFull => parsed.set_month(i64::from(dt.month())),
        DatePart::Day | DatePart::Day2 | DatePart::DayOrdinal => {
            parsed.set_day(i64::from(dt.day()))
        }
        DatePart::DayOfYear | DatePart::DayOfYearOrdinal | DatePart::DayOfYear3 => {
            parsed.set_ordinal(i64::from(dt.ordinal()))
        }
        DatePart::Weekday
        | DatePart::WeekdayOrdinal
        | DatePart::WeekdayMin
        | DatePart::WeekdayShort
        | DatePart::WeekdayFull
        | DatePart::IsoWeekday => parsed.set_weekday(dt.weekday()),
        DatePart::Hour
        | DatePart::Hour2
        | DatePart::Hour24
        | DatePart::Hour24Two => parsed.set_hour(i64::from(dt.hour())),
        DatePart::Hour12 | DatePart::Hour12Two => {
            parsed.set_hour12(i64::from(to_12_hour(dt.hour())))
        }
        DatePart::AmPmUpper | DatePart::AmPmLower => parsed.set_ampm(dt.hour() >= 12),
        DatePart::Minute | DatePart::Minute2 => parsed.set_minute(i64::from(dt.minute())),
        DatePart::Second | DatePart::Second2 => parsed.set_second(i64::from(dt.second())),
        DatePart::Fraction(places) => {
            let divisor = 10_u32.pow(9 - u32::from(places));
            let nanos = dt.nanosecond() % 1_000_000_000 / divisor * divisor;
            parsed.set_nanosecond(i64::from(nanos))
        }
        DatePart::Offset | DatePart::OffsetCompact => {
            parsed.set_offset(i64::from(dt.offset().local_minus_utc()))
        }
        DatePart::UnixSeconds => parsed.set_timestamp(dt.timestamp()),
        DatePart::UnixMillis => set_millis(parsed, dt.timestamp_millis()),
    }
}

fn set_millis(parsed: &mut Parsed, millis: i64) -> ParseResult<()> {
    parsed.set_timestamp(millis.div_euclid(1000))?;
    parsed.set_nanosecond(millis.rem_euclid(1000) * 1_000_000)
}

type Setter = fn(&mut Parsed, i64) -> ParseResult<()>;

/// Cursor over the input being scanned.
struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
    parsed: Parsed,
    locale: Locale,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            rest: input,
            parsed: Parsed::new(),
            locale: Locale::default(),
        }
    }

    fn position(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::Mismatch {
            position: self.position(),
            expected,
        }
    }

    fn field_error(&self, err: format::ParseError, field: &'static str) -> ParseError {
        match err.kind() {
            ParseErrorKind::OutOfRange => ParseError::FieldOutOfRange { field },
            ParseErrorKind::Impossible => ParseError::FieldConflict { field },
            _ => self.mismatch(field),
        }
    }

    fn literal(&mut self, text: &str) -> Result<(), ParseError> {
        self.rest = format::parse_and_remainder(
            &mut self.parsed,
            self.rest,
            std::iter::once(Item::Literal(text)),
        )
        .map_err(|_| self.mismatch("literal text"))?;
        Ok(())
    }

    /// Reads one chrono item, after checking that at least `digits` ASCII digits follow.
    fn item(
        &mut self,
        item: Item<'_>,
        digits: usize,
        field: &'static str,
    ) -> Result<(), ParseError> {
        if digit_run(self.rest) < digits {
            return Err(self.mismatch(field));
        }
        self.rest =
            format::parse_and_remainder(&mut self.parsed, self.rest, std::iter::once(item))
                .map_err(|err| self.field_error(err, field))?;
        Ok(())
    }

    fn numeric(
        &mut self,
        numeric: Numeric,
        width: usize,
        field: &'static str,
    ) -> Result<(), ParseError> {
        let pad = if width > 1 { Pad::Zero } else { Pad::None };
        self.item(Item::Numeric(numeric, pad), width.max(1), field)
    }

    fn fixed(&mut self, fixed: Fixed, field: &'static str) -> Result<(), ParseError> {
        self.item(Item::Fixed(fixed), 0, field)
    }

    fn store(
        &mut self,
        setter: Setter,
        value: i64,
        field: &'static str,
    ) -> Result<(), ParseError> {
        setter(&mut self.parsed, value).map_err(|err| self.field_error(err, field))
    }

    /// Reads between `min` and `max` ASCII digits.
    fn digits(
        &mut self,
        min: usize,
        max: usize,
        field: &'static str,
    ) -> Result<i64, ParseError> {
        let len = digit_run(self.rest).min(max);
        if len < min {
            return Err(self.mismatch(field));
        }
        let value = self.rest[..len]
            .parse()
            .map_err(|_| ParseError::FieldOutOfRange { field })?;
        self.rest = &self.rest[len..];
        Ok(value)
    }

    /// Reads an optionally negative integer.
    fn signed(&mut self, field: &'static str) -> Result<i64, ParseError> {
        match self.rest.strip_prefix('-') {
            Some(rest) if digit_run(rest) > 0 => {
                self.rest = rest;
                Ok(-self.digits(1, 19, field)?)
            }
            _ => self.digits(1, 19, field),
        }
    }

    /// Reads a number followed by its English ordinal suffix.
    fn ordinal(&mut self, max: usize, field: &'static str) -> Result<i64, ParseError> {
        let n = self.digits(1, max, field)?;
        let suffix = u32::try_from(n).map_or("", |n| self.locale.ordinal_suffix(n));
        match self.rest.strip_prefix(suffix) {
            Some(rest) => {
                self.rest = rest;
                Ok(n)
            }
            None => Err(self.mismatch("ordinal suffix")),
        }
    }

    fn weekday(&mut self, index: i64) -> Result<(), ParseError> {
        let weekday = usize::try_from(index)
            .ok()
            .and_then(|i| SUNDAY_FIRST.get(i))
            .ok_or(ParseError::FieldOutOfRange { field: "weekday" })?;
        self.parsed
            .set_weekday(*weekday)
            .map_err(|err| self.field_error(err, "weekday"))
    }

    /// Matches one of the two-letter weekday names, case-insensitively.
    fn weekday_min(&mut self) -> Result<(), ParseError> {
        let rest = self.rest;
        let found = self.locale.day_names_min.iter().position(|name| {
            rest.get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
        });
        let Some(index) = found else {
            return Err(self.mismatch("weekday"));
        };
        self.rest = &rest[self.locale.day_names_min[index].len()..];
        self.weekday(index as i64)
    }

    fn field(&mut self, part: DatePart) -> Result<(), ParseError> {
        match part {
            DatePart::Year => {
                let year = self.signed("year")?;
                self.store(Parsed::set_year, year, "year")
            }
            DatePart::Year2 => self.numeric(Numeric::YearMod100, 2, "year"),
            DatePart::Year4 => self.numeric(Numeric::Year, 4, "year"),
            DatePart::Quarter => self.numeric(Numeric::Quarter, 1, "quarter"),
            DatePart::QuarterOrdinal => {
                let quarter = self.ordinal(1, "quarter")?;
                self.store(Parsed::set_quarter, quarter, "quarter")
            }
            DatePart::Month => self.numeric(Numeric::Month, 1, "month"),
            DatePart::Month2 => self.numeric(Numeric::Month, 2, "month"),
            DatePart::MonthOrdinal => {
                let month = self.ordinal(2, "month")?;
                self.store(Parsed::set_month, month, "month")
            }
            DatePart::MonthAbbr => self.fixed(Fixed::ShortMonthName, "month"),
            DatePart::MonthFull => self.fixed(Fixed::LongMonthName, "month"),
            DatePart::Day => self.numeric(Numeric::Day, 1, "day"),
            DatePart::Day2 => self.numeric(Numeric::Day, 2, "day"),
            DatePart::DayOrdinal => {
                let day = self.ordinal(2, "day")?;
                self.store(Parsed::set_day, day, "day")
            }
            DatePart::DayOfYear => self.numeric(Numeric::Ordinal, 1, "day of year"),
            DatePart::DayOfYear3 => self.numeric(Numeric::Ordinal, 3, "day of year"),
            DatePart::DayOfYearOrdinal => {
                let ordinal = self.ordinal(3, "day of year")?;
                self.store(Parsed::set_ordinal, ordinal, "day of year")
            }
            DatePart::Weekday => self.numeric(Numeric::NumDaysFromSun, 1, "weekday"),
            DatePart::WeekdayOrdinal => {
                let index = self.ordinal(1, "weekday")?;
                self.weekday(index)
            }
            DatePart::WeekdayMin => self.weekday_min(),
            DatePart::WeekdayShort => self.fixed(Fixed::ShortWeekdayName, "weekday"),
            DatePart::WeekdayFull => self.fixed(Fixed::LongWeekdayName, "weekday"),
            DatePart::IsoWeekday => self.numeric(Numeric::WeekdayFromMon, 1, "weekday"),
            DatePart::Hour => self.numeric(Numeric::Hour, 1, "hour"),
            DatePart::Hour2 => self.numeric(Numeric::Hour, 2, "hour"),
            DatePart::Hour12 => self.numeric(Numeric::Hour12, 1, "hour"),
            DatePart::Hour12Two => self.numeric(Numeric::Hour12, 2, "hour"),
            DatePart::Hour24 | DatePart::Hour24Two => {
                let min = if part == DatePart::Hour24 { 1 } else { 2 };
                let hour = self.digits(min, 2, "hour")?;
                if !(1..=24).contains(&hour) {
                    return Err(ParseError::FieldOutOfRange { field: "hour" });
                }
                self.store(Parsed::set_hour, hour % 24, "hour")
            }
            DatePart::Minute => self.numeric(Numeric::Minute, 1, "minute"),
            DatePart::Minute2 => self.numeric(Numeric::Minute, 2, "minute"),
            DatePart::Second => self.numeric(Numeric::Second, 1, "second"),
            DatePart::Second2 => self.numeric(Numeric::Second, 2, "second"),
            DatePart::Fraction(places) => {
                let places = usize::from(places);
                let value = self.digits(places, places, "fraction")?;
                let nanos = value * 10_i64.pow(9 - places as u32);
                self.store(Parsed::set_nanosecond, nanos, "fraction")
            }
            DatePart::AmPmUpper => self.fixed(Fixed::UpperAmPm, "AM/PM"),
            DatePart::AmPmLower => self.fixed(Fixed::LowerAmPm, "AM/PM"),
            DatePart::Offset | DatePart::OffsetCompact => {
                if !self.rest.starts_with(['+', '-', 'Z']) {
                    return Err(self.mismatch("offset"));
                }
                let fixed = if part == DatePart::Offset {
                    Fixed::TimezoneOffsetColonZ
                } else {
                    Fixed::TimezoneOffsetZ
                };
                self.fixed(fixed, "offset")
            }
            DatePart::UnixSeconds => {
                let seconds = self.signed("timestamp")?;
                self.store(Parsed::set_timestamp, seconds, "timestamp")
            }
            DatePart::UnixMillis => {
                let millis = self.signed("timestamp")?;
                self.store(set_millis, millis, "timestamp")
            }
        }
    }
}

/// Number of leading ASCII digits.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pattern(p: &str) -> DatePattern {
        DatePattern::parse(p).unwrap()
    }

    #[test]
    fn test_scan_default_pattern() {
        let fields = pattern("DD/MM/YYYY").scan("09/01/2026").unwrap();
        let parsed = fields.as_parsed();
        assert_eq!(parsed.day(), Some(9));
        assert_eq!(parsed.month(), Some(1));
        assert_eq!(parsed.year(), Some(2026));
        assert_eq!(parsed.hour_mod_12(), None);
    }

    #[test]
    fn test_scan_is_strict_about_width() {
        assert!(pattern("DD/MM/YYYY").scan("9/01/2026").is_err());
        assert!(pattern("DD/MM/YYYY").scan(" 9/01/2026").is_err());
        assert!(pattern("D/M/YYYY").scan("9/1/2026").is_ok());
    }

    #[test]
    fn test_scan_trailing_input() {
        assert_eq!(
            pattern("YYYY").scan("2026x"),
            Err(ParseError::TrailingInput { position: 4 })
        );
    }

    #[test]
    fn test_scan_out_of_range() {
        assert_eq!(
            pattern("MM").scan("13"),
            Err(ParseError::FieldOutOfRange { field: "month" })
        );
        assert_eq!(
            pattern("kk").scan("25"),
            Err(ParseError::FieldOutOfRange { field: "hour" })
        );
    }

    #[test]
    fn test_conflicting_fields() {
        assert_eq!(
            pattern("MM MMM").scan("01 Feb"),
            Err(ParseError::FieldConflict { field: "month" })
        );
        assert!(pattern("MM MMM").scan("02 Feb").is_ok());
    }

    #[test]
    fn test_scan_ordinals() {
        let fields = pattern("Qo DDDo do").scan("1st 65th 2nd").unwrap();
        let parsed = fields.as_parsed();
        assert_eq!(parsed.quarter(), Some(1));
        assert_eq!(parsed.ordinal(), Some(65));
        assert_eq!(parsed.weekday(), Some(Weekday::Tue));

        assert!(matches!(
            pattern("Do").scan("3th"),
            Err(ParseError::Mismatch { position: 1, .. })
        ));
    }

    #[test]
    fn test_resolve_twelve_hour_clock() {
        let dt = pattern("h:mm A").parse_datetime("12:30 AM").unwrap();
        assert_eq!(dt.hour(), 0);
        let dt = pattern("h:mm a").parse_datetime("1:05 pm").unwrap();
        assert_eq!(dt.hour(), 13);
        let dt = pattern("k:mm").parse_datetime("24:00").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_resolve_weekday_mismatch() {
        // 2026-01-09 is a Friday
        assert!(pattern("ddd DD/MM/YYYY").parse_datetime("Fri 09/01/2026").is_ok());
        assert!(matches!(
            pattern("ddd DD/MM/YYYY").parse_datetime("Mon 09/01/2026"),
            Err(ParseError::Unresolvable(err)) if err.kind() == ParseErrorKind::Impossible
        ));
    }

    #[test]
    fn test_resolve_quarter_and_fraction_defaults() {
        let dt = pattern("YYYY Q").parse_datetime("2026 3").unwrap();
        assert_eq!((dt.month(), dt.day()), (7, 1));

        let dt = pattern("HH:mm.SSS").parse_datetime("10:15.250").unwrap();
        assert_eq!(dt.nanosecond(), 250_000_000);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_resolve_offset_and_timestamp() {
        let dt = pattern("YYYY-MM-DD HH:mm Z")
            .parse_datetime("2026-01-09 10:00 +05:30")
            .unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600 + 30 * 60);

        let dt = pattern("X").parse_datetime("86400").unwrap();
        assert_eq!(dt.timestamp(), 86400);

        let dt = pattern("x").parse_datetime("-1500").unwrap();
        assert_eq!(dt.timestamp_millis(), -1500);
    }

    #[test]
    fn test_resolve_two_digit_year_pivot() {
        assert_eq!(pattern("YY").parse_datetime("69").unwrap().year(), 2069);
        assert_eq!(pattern("YY").parse_datetime("70").unwrap().year(), 1970);
    }

    #[test]
    fn test_from_instant_matches_scan() {
        let dt = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 19, 8, 5, 0)
            .unwrap();
        let compiled = pattern("dd, Do MMM YYYY hh:mm a ZZ");
        let scanned = compiled.scan(&compiled.format(&dt)).unwrap();
        assert_eq!(scanned, DateFields::from_instant(&compiled, &dt).unwrap());
    }
}
