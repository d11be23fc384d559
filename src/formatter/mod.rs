//! Value conversion engine

mod date;
mod number;

pub use number::{format_money, format_number, group_digits, MAX_MONEY_DECIMALS};

pub(crate) use date::to_12_hour;

use chrono::{DateTime, FixedOffset};

use crate::ast::DatePattern;
use crate::cache;
use crate::error::ConvertError;
use crate::settings::{default_settings, Settings, SettingsPatch};
use crate::value::Value;

/// Converts dates and numbers into display strings according to its settings.
///
/// Settings handed to [`Formatter::new`] are taken as-is; patterns are only
/// validated when they arrive through [`Formatter::set_settings`]. A stored
/// pattern that does not compile is reported when it is first used.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    settings: Settings,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(None)
    }
}

impl Formatter {
    /// Create a formatter. `None` selects [`default_settings`].
    pub fn new(settings: impl Into<Option<Settings>>) -> Self {
        Formatter {
            settings: settings.into().unwrap_or_else(default_settings),
        }
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the formatter and returns its settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Apply a partial settings update.
    ///
    /// Each field present in `patch` is validated and committed on its own:
    /// an invalid date pattern is left out, but the other fields of the same
    /// patch are still applied. The first error encountered is returned.
    /// Money and number settings replace the stored sub-settings whole and
    /// are not validated, neither is the timezone.
    pub fn set_settings(
        &mut self,
        patch: impl Into<Option<SettingsPatch>>,
    ) -> Result<(), ConvertError> {
        let patch = patch.into().ok_or(ConvertError::MissingSettings)?;
        let mut first_error = None;

        if let Some(pattern) = patch.date_format {
            match DatePattern::validate_strict(&pattern) {
                Ok(()) => {
                    log::debug!("date format set to {pattern:?}");
                    self.settings.date_format = pattern;
                }
                Err(source) => {
                    first_error.get_or_insert(ConvertError::InvalidDateFormat { pattern, source });
                }
            }
        }

        if let Some(pattern) = patch.date_time_format {
            match DatePattern::validate_strict(&pattern) {
                Ok(()) => {
                    log::debug!("date time format set to {pattern:?}");
                    self.settings.date_time_format = pattern;
                }
                Err(source) => {
                    first_error
                        .get_or_insert(ConvertError::InvalidDateTimeFormat { pattern, source });
                }
            }
        }

        if let Some(timezone) = patch.timezone {
            log::debug!("timezone set to {timezone:?}");
            self.settings.timezone = timezone;
        }

        if let Some(money) = patch.money {
            log::debug!("money settings replaced: {money:?}");
            self.settings.money = money;
        }

        if let Some(number) = patch.number {
            log::debug!("number settings replaced: {number:?}");
            self.settings.number = number;
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Convert a date value to a date string using the date format.
    ///
    /// An empty value gives an empty string. No timezone conversion is applied.
    pub fn date_to_date_string<'a>(
        &self,
        value: impl Into<Value<'a>>,
    ) -> Result<String, ConvertError> {
        let value: Value<'a> = value.into();
        let Some(dt) = value.as_datetime()? else {
            return Ok(String::new());
        };
        self.format_with(&self.settings.date_format, &dt)
    }

    /// Convert a date value to a date-time string using the date time format.
    ///
    /// With `use_timezone` the value is first converted into the configured
    /// timezone; otherwise it is formatted in its own offset.
    pub fn date_to_date_time_string<'a>(
        &self,
        value: impl Into<Value<'a>>,
        use_timezone: bool,
    ) -> Result<String, ConvertError> {
        let value: Value<'a> = value.into();
        let Some(dt) = value.as_datetime()? else {
            return Ok(String::new());
        };
        let dt = if use_timezone {
            date::to_timezone(&dt, &self.settings.timezone)?
        } else {
            dt
        };
        self.format_with(&self.settings.date_time_format, &dt)
    }

    /// Convert a number to a grouped number string.
    pub fn number_to_number_string<'a>(
        &self,
        value: impl Into<Value<'a>>,
    ) -> Result<String, ConvertError> {
        let Some(n) = coerce_number(value.into())? else {
            return Ok(String::new());
        };
        Ok(format_number(n, &self.settings.number))
    }

    /// Convert a number to a money string: rounded, grouped and with the currency symbol.
    pub fn number_to_money_string<'a>(
        &self,
        value: impl Into<Value<'a>>,
    ) -> Result<String, ConvertError> {
        let Some(n) = coerce_number(value.into())? else {
            return Ok(String::new());
        };
        Ok(format_money(n, &self.settings.money, &self.settings.number))
    }

    fn format_with(
        &self,
        pattern: &str,
        dt: &DateTime<FixedOffset>,
    ) -> Result<String, ConvertError> {
        let compiled =
            cache::get_or_parse(pattern).map_err(|source| ConvertError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(compiled.format(dt))
    }
}

/// Coerce a value to a finite number; `Ok(None)` for an empty value.
fn coerce_number(value: Value<'_>) -> Result<Option<f64>, ConvertError> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.as_number() {
        Some(n) => Ok(Some(n)),
        None => Err(ConvertError::InvalidNumber {
            value: describe(&value),
        }),
    }
}

fn describe(value: &Value<'_>) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Text(s) => format!("{s:?}"),
        other => other.type_name().to_string(),
    }
}
