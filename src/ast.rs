//! AST types for compiled date patterns.

use crate::error::ParseError;

/// A single date or time field of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// `Y` - Year with as many digits as needed
    Year,
    /// `YY` - Two-digit year
    Year2,
    /// `YYYY` - Four-digit year
    Year4,
    /// `Q` - Quarter (1-4)
    Quarter,
    /// `Qo` - Quarter as ordinal (1st-4th)
    QuarterOrdinal,
    /// `M` - Month without leading zero (1-12)
    Month,
    /// `MM` - Month with leading zero (01-12)
    Month2,
    /// `Mo` - Month as ordinal (1st-12th)
    MonthOrdinal,
    /// `MMM` - Abbreviated month name (Jan)
    MonthAbbr,
    /// `MMMM` - Full month name (January)
    MonthFull,
    /// `D` - Day of month without leading zero (1-31)
    Day,
    /// `DD` - Day of month with leading zero (01-31)
    Day2,
    /// `Do` - Day of month as ordinal (1st-31st)
    DayOrdinal,
    /// `DDD` - Day of year (1-366)
    DayOfYear,
    /// `DDDo` - Day of year as ordinal (1st-366th)
    DayOfYearOrdinal,
    /// `DDDD` - Day of year with leading zeros (001-366)
    DayOfYear3,
    /// `d` - Day of week, Sunday is 0
    Weekday,
    /// `do` - Day of week as ordinal, Sunday is 0th
    WeekdayOrdinal,
    /// `dd` - Two-letter weekday name (Su)
    WeekdayMin,
    /// `ddd` - Abbreviated weekday name (Sun)
    WeekdayShort,
    /// `dddd` - Full weekday name (Sunday)
    WeekdayFull,
    /// `E` - ISO day of week, Monday is 1
    IsoWeekday,
    /// `H` - Hour 0-23
    Hour,
    /// `HH` - Hour 00-23
    Hour2,
    /// `h` - Hour 1-12
    Hour12,
    /// `hh` - Hour 01-12
    Hour12Two,
    /// `k` - Hour 1-24
    Hour24,
    /// `kk` - Hour 01-24
    Hour24Two,
    /// `m` - Minute 0-59
    Minute,
    /// `mm` - Minute 00-59
    Minute2,
    /// `s` - Second 0-59
    Second,
    /// `ss` - Second 00-59
    Second2,
    /// `S` to `SSSSSSSSS` - Fractional seconds, truncated to the given digits
    Fraction(u8),
    /// `A` - AM/PM
    AmPmUpper,
    /// `a` - am/pm
    AmPmLower,
    /// `Z` - UTC offset as +HH:MM
    Offset,
    /// `ZZ` - UTC offset as +HHMM
    OffsetCompact,
    /// `X` - Unix timestamp in seconds
    UnixSeconds,
    /// `x` - Unix timestamp in milliseconds
    UnixMillis,
}

impl DatePart {
    /// Maps a letter run from the lexer to a date part.
    pub fn from_run(letter: char, count: usize, ordinal: bool) -> Option<DatePart> {
        let part = match (letter, count, ordinal) {
            ('Y', 1, false) => DatePart::Year,
            ('Y', 2, false) => DatePart::Year2,
            ('Y', 4, false) => DatePart::Year4,
            ('Q', 1, false) => DatePart::Quarter,
            ('Q', 1, true) => DatePart::QuarterOrdinal,
            ('M', 1, false) => DatePart::Month,
            ('M', 1, true) => DatePart::MonthOrdinal,
            ('M', 2, false) => DatePart::Month2,
            ('M', 3, false) => DatePart::MonthAbbr,
            ('M', 4, false) => DatePart::MonthFull,
            ('D', 1, false) => DatePart::Day,
            ('D', 1, true) => DatePart::DayOrdinal,
            ('D', 2, false) => DatePart::Day2,
            ('D', 3, false) => DatePart::DayOfYear,
            ('D', 3, true) => DatePart::DayOfYearOrdinal,
            ('D', 4, false) => DatePart::DayOfYear3,
            ('d', 1, false) => DatePart::Weekday,
            ('d', 1, true) => DatePart::WeekdayOrdinal,
            ('d', 2, false) => DatePart::WeekdayMin,
            ('d', 3, false) => DatePart::WeekdayShort,
            ('d', 4, false) => DatePart::WeekdayFull,
            ('E', 1, false) => DatePart::IsoWeekday,
            ('H', 1, false) => DatePart::Hour,
            ('H', 2, false) => DatePart::Hour2,
            ('h', 1, false) => DatePart::Hour12,
            ('h', 2, false) => DatePart::Hour12Two,
            ('k', 1, false) => DatePart::Hour24,
            ('k', 2, false) => DatePart::Hour24Two,
            ('m', 1, false) => DatePart::Minute,
            ('m', 2, false) => DatePart::Minute2,
            ('s', 1, false) => DatePart::Second,
            ('s', 2, false) => DatePart::Second2,
            ('S', n @ 1..=9, false) => DatePart::Fraction(n as u8),
            ('A', 1, false) => DatePart::AmPmUpper,
            ('a', 1, false) => DatePart::AmPmLower,
            ('Z', 1, false) => DatePart::Offset,
            ('Z', 2, false) => DatePart::OffsetCompact,
            ('X', 1, false) => DatePart::UnixSeconds,
            ('x', 1, false) => DatePart::UnixMillis,
            _ => return None,
        };
        Some(part)
    }

    /// Returns true for parts that describe the time of day.
    pub fn is_time(&self) -> bool {
        matches!(
            self,
            DatePart::Hour
                | DatePart::Hour2
                | DatePart::Hour12
                | DatePart::Hour12Two
                | DatePart::Hour24
                | DatePart::Hour24Two
                | DatePart::Minute
                | DatePart::Minute2
                | DatePart::Second
                | DatePart::Second2
                | DatePart::Fraction(_)
                | DatePart::AmPmUpper
                | DatePart::AmPmLower
        )
    }
}

/// A part of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    /// Text copied through unchanged
    Literal(String),
    /// A date or time field
    Field(DatePart),
}

/// A compiled date pattern such as `DD/MM/YYYY HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, ParseError> {
        crate::parser::parse(pattern)
    }

    /// Create a DatePattern from already compiled parts.
    pub fn from_parts(source: impl Into<String>, parts: Vec<PatternPart>) -> Self {
        DatePattern {
            source: source.into(),
            parts,
        }
    }

    /// Returns the pattern text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the compiled parts.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// Iterates over the date and time fields only.
    pub fn fields(&self) -> impl Iterator<Item = DatePart> + '_ {
        self.parts.iter().filter_map(|p| match p {
            PatternPart::Field(f) => Some(*f),
            PatternPart::Literal(_) => None,
        })
    }

    /// Returns true if the pattern has any time-of-day field.
    pub fn has_time_parts(&self) -> bool {
        self.fields().any(|f| f.is_time())
    }
}

impl std::str::FromStr for DatePattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatePattern::parse(s)
    }
}

impl std::fmt::Display for DatePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
