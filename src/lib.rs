//! valfmt - locale-aware formatting of dates, numbers and money amounts
//!
//! A [`Formatter`] holds a [`Settings`] bundle (date patterns, timezone,
//! number and money rules) and converts values into display strings. Date
//! patterns use moment-style tokens such as `DD/MM/YYYY HH:mm:ss`.
//!
//! ```
//! use valfmt::Formatter;
//!
//! let formatter = Formatter::default();
//! assert_eq!(formatter.number_to_number_string(1234567.5).unwrap(), "1.234.567,5");
//! assert_eq!(formatter.number_to_money_string(5).unwrap(), "€5,00");
//! ```

pub mod ast;
pub mod date_fields;
pub mod error;
pub mod settings;
pub mod value;

mod cache;
mod formatter;
mod locale;
pub mod parser;

pub use ast::{DatePart, DatePattern, PatternPart};
pub use date_fields::DateFields;
pub use error::{ConvertError, ErrorKind, ParseError};
pub use formatter::{format_money, format_number, group_digits, Formatter, MAX_MONEY_DECIMALS};
pub use locale::Locale;
pub use settings::{
    default_settings, DecimalSeparator, DigitSeparator, MoneySettings, NumberSettings, Settings,
    SettingsPatch, SymbolLocation,
};
pub use value::Value;

/// Build a throwaway formatter from the given settings, or the defaults.
fn formatter_for(settings: Option<&Settings>) -> Formatter {
    Formatter::new(settings.cloned())
}

/// Convert a date value to a date string without managing a [`Formatter`].
pub fn date_to_date_string<'a>(
    settings: Option<&Settings>,
    value: impl Into<Value<'a>>,
) -> Result<String, ConvertError> {
    formatter_for(settings).date_to_date_string(value)
}

/// Convert a date value to a date-time string without managing a [`Formatter`].
pub fn date_to_date_time_string<'a>(
    settings: Option<&Settings>,
    value: impl Into<Value<'a>>,
    use_timezone: bool,
) -> Result<String, ConvertError> {
    formatter_for(settings).date_to_date_time_string(value, use_timezone)
}

/// Convert a number to a grouped number string without managing a [`Formatter`].
pub fn number_to_number_string<'a>(
    settings: Option<&Settings>,
    value: impl Into<Value<'a>>,
) -> Result<String, ConvertError> {
    formatter_for(settings).number_to_number_string(value)
}

/// Convert a number to a money string without managing a [`Formatter`].
///
/// Applies the money rules (rounding and currency symbol) like
/// [`Formatter::number_to_money_string`].
pub fn number_to_money_string<'a>(
    settings: Option<&Settings>,
    value: impl Into<Value<'a>>,
) -> Result<String, ConvertError> {
    formatter_for(settings).number_to_money_string(value)
}
