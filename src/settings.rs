//! Conversion settings and their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SymbolLocation {
    #[default]
    Before,
    After,
}

/// Separator between the integer and the fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalSeparator {
    #[cfg_attr(feature = "serde", serde(rename = "."))]
    Dot,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ","))]
    Comma,
}

impl DecimalSeparator {
    pub fn as_char(&self) -> char {
        match self {
            DecimalSeparator::Dot => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Separator placed between groups of three integer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitSeparator {
    /// No grouping at all.
    #[cfg_attr(feature = "serde", serde(rename = "NONE"))]
    None,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "."))]
    Dot,
    #[cfg_attr(feature = "serde", serde(rename = ","))]
    Comma,
}

impl DigitSeparator {
    /// The text inserted between digit groups; empty for [`DigitSeparator::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitSeparator::None => "",
            DigitSeparator::Dot => ".",
            DigitSeparator::Comma => ",",
        }
    }
}

/// Rules for rendering money amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MoneySettings {
    /// Currency symbol or text.
    pub symbol: String,
    pub symbol_location: SymbolLocation,
    /// Number of fractional digits amounts are rounded to.
    pub decimals: u32,
}

impl Default for MoneySettings {
    fn default() -> Self {
        MoneySettings {
            symbol: "€".to_string(),
            symbol_location: SymbolLocation::Before,
            decimals: 2,
        }
    }
}

/// Rules for rendering plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberSettings {
    #[cfg_attr(feature = "serde", serde(rename = "decimalSeperationSymbol"))]
    pub decimal_separator: DecimalSeparator,
    #[cfg_attr(feature = "serde", serde(rename = "digitSeperationSymbol"))]
    pub digit_separator: DigitSeparator,
}

/// The complete settings bundle used by a [`Formatter`](crate::Formatter).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    /// Pattern used for plain dates, e.g. `DD/MM/YYYY`.
    pub date_format: String,
    /// Pattern used for date-times, e.g. `DD/MM/YYYY HH:mm:ss`.
    pub date_time_format: String,
    /// IANA timezone identifier date-times are converted into.
    pub timezone: String,
    #[cfg_attr(feature = "serde", serde(rename = "moneySettings"))]
    pub money: MoneySettings,
    #[cfg_attr(feature = "serde", serde(rename = "numberSettings"))]
    pub number: NumberSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            date_format: "DD/MM/YYYY".to_string(),
            date_time_format: "DD/MM/YYYY HH:mm:ss".to_string(),
            timezone: "UTC".to_string(),
            money: MoneySettings::default(),
            number: NumberSettings::default(),
        }
    }
}

/// Returns a fresh default settings bundle.
///
/// Every call builds a new value; nothing is shared between callers.
pub fn default_settings() -> Settings {
    Settings::default()
}

/// A partial settings update. Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SettingsPatch {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub date_format: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub date_time_format: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub timezone: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "moneySettings", skip_serializing_if = "Option::is_none")
    )]
    pub money: Option<MoneySettings>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "numberSettings", skip_serializing_if = "Option::is_none")
    )]
    pub number: Option<NumberSettings>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    pub fn date_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_time_format = Some(pattern.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn money(mut self, money: MoneySettings) -> Self {
        self.money = Some(money);
        self
    }

    pub fn number(mut self, number: NumberSettings) -> Self {
        self.number = Some(number);
        self
    }

    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.date_format.is_none()
            && self.date_time_format.is_none()
            && self.timezone.is_none()
            && self.money.is_none()
            && self.number.is_none()
    }
}

impl From<Settings> for SettingsPatch {
    fn from(settings: Settings) -> Self {
        SettingsPatch {
            date_format: Some(settings.date_format),
            date_time_format: Some(settings.date_time_format),
            timezone: Some(settings.timezone),
            money: Some(settings.money),
            number: Some(settings.number),
        }
    }
}
