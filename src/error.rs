//! Error types for pattern parsing and value conversion.

use thiserror::Error;

/// Errors that can occur when parsing a date pattern or scanning text against one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("unknown pattern token '{found}' at position {position}")]
    UnknownToken { position: usize, found: char },

    #[error("unterminated escape at position {position}")]
    UnterminatedEscape { position: usize },

    #[error("pattern contains no date or time tokens")]
    NoDateParts,

    #[error("input does not match pattern at position {position}: expected {expected}")]
    Mismatch {
        position: usize,
        expected: &'static str,
    },

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("field out of range: {field}")]
    FieldOutOfRange { field: &'static str },

    #[error("conflicting values for {field}")]
    FieldConflict { field: &'static str },

    #[error("scanned fields do not form a valid date: {0}")]
    Unresolvable(chrono::format::ParseError),

    #[error("formatted value does not survive a strict round trip")]
    NotRoundTrip,
}

/// The three broad failure categories a conversion can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Settings are missing or hold an unusable pattern or timezone.
    Configuration,
    /// The argument is not of the expected kind (e.g. text where a date was expected).
    TypeArgument,
    /// The argument has the right kind but an unusable value.
    InvalidValue,
}

/// Errors that can occur when updating settings or converting a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("settings are required to update the settings")]
    MissingSettings,

    #[error("invalid date format '{pattern}': {source}")]
    InvalidDateFormat {
        pattern: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid date time format '{pattern}': {source}")]
    InvalidDateTimeFormat {
        pattern: String,
        #[source]
        source: ParseError,
    },

    #[error("configured pattern '{pattern}' cannot be used: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ParseError,
    },

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("the given date is not valid: {reason}")]
    InvalidDate { reason: String },

    #[error("the given value is not a valid number: {value}")]
    InvalidNumber { value: String },
}

impl ConvertError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::MissingSettings
            | ConvertError::InvalidDateFormat { .. }
            | ConvertError::InvalidDateTimeFormat { .. }
            | ConvertError::InvalidPattern { .. }
            | ConvertError::UnknownTimezone(_) => ErrorKind::Configuration,
            ConvertError::TypeMismatch { .. } => ErrorKind::TypeArgument,
            ConvertError::InvalidDate { .. } | ConvertError::InvalidNumber { .. } => {
                ErrorKind::InvalidValue
            }
        }
    }
}
