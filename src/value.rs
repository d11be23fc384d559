//! Value types that can be converted.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::ConvertError;

/// A value handed to one of the conversion operations.
///
/// `Empty` stands for an absent value and always converts to an empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No value
    Empty,
    /// A numeric value
    Number(f64),
    /// A text value; numeric conversions try to read a number from it
    Text(&'a str),
    /// A boolean value (converts to 1 or 0)
    Bool(bool),
    /// An instant with its own UTC offset
    DateTime(DateTime<FixedOffset>),
    /// A wall-clock date-time without offset, read as UTC
    Naive(NaiveDateTime),
    /// A calendar date, read as midnight UTC
    Date(NaiveDate),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<u64> for Value<'a> {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<usize> for Value<'a> {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Empty, Into::into)
    }
}

impl<'a> From<DateTime<FixedOffset>> for Value<'a> {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTime(dt)
    }
}

impl<'a> From<DateTime<Utc>> for Value<'a> {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.fixed_offset())
    }
}

impl<'a> From<DateTime<chrono_tz::Tz>> for Value<'a> {
    fn from(dt: DateTime<chrono_tz::Tz>) -> Self {
        Value::DateTime(dt.fixed_offset())
    }
}

impl<'a> From<NaiveDateTime> for Value<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        Value::Naive(dt)
    }
}

impl<'a> From<NaiveDate> for Value<'a> {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<'a> Value<'a> {
    /// Returns true if this value is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns true for the date-like variants.
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            Value::DateTime(_) | Value::Naive(_) | Value::Date(_) | Value::Timestamp(_)
        )
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "datetime",
            Value::Naive(_) => "naive datetime",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
        }
    }

    /// Coerces the value to a number.
    ///
    /// Text is trimmed first and blank text reads as zero. Dates and
    /// non-finite results are rejected.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Value::Number(n) => *n,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Returns the date value as an instant with offset.
    ///
    /// `Ok(None)` is returned for [`Value::Empty`].
    pub fn as_datetime(&self) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
        match self {
            Value::Empty => Ok(None),
            Value::DateTime(dt) => Ok(Some(*dt)),
            Value::Naive(dt) => Ok(Some(Utc.from_utc_datetime(dt).fixed_offset())),
            Value::Date(d) => {
                let midnight = d.and_hms_opt(0, 0, 0).ok_or_else(|| ConvertError::InvalidDate {
                    reason: format!("{d} has no midnight"),
                })?;
                Ok(Some(Utc.from_utc_datetime(&midnight).fixed_offset()))
            }
            Value::Timestamp(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| Some(dt.fixed_offset()))
                .ok_or_else(|| ConvertError::InvalidDate {
                    reason: format!("timestamp {ms} is out of range"),
                }),
            other => Err(ConvertError::TypeMismatch {
                expected: "date",
                got: other.type_name(),
            }),
        }
    }
}
