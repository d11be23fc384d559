//! Number and money formatting

use crate::settings::{MoneySettings, NumberSettings, SymbolLocation};

/// Format a finite number with digit grouping.
///
/// The absolute value is rendered in plain decimal notation. Integer digits
/// are grouped by three from the right, and the fractional digits are
/// appended as rendered, without rounding or grouping.
pub fn format_number(value: f64, settings: &NumberSettings) -> String {
    let negative = value < 0.0;
    assemble(negative, &value.abs().to_string(), settings)
}

/// Largest number of fractional digits a money amount is rendered with.
pub const MAX_MONEY_DECIMALS: u32 = 100;

/// Format a finite number as a money amount.
///
/// The amount is rounded half away from zero to `money.decimals` digits and
/// always shows exactly that many fractional digits. `decimals` is capped at
/// [`MAX_MONEY_DECIMALS`].
pub fn format_money(value: f64, money: &MoneySettings, number: &NumberSettings) -> String {
    let decimals = money.decimals.min(MAX_MONEY_DECIMALS);
    let rounded = round_to(value, decimals);
    let negative = rounded < 0.0;
    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    let amount = assemble(negative, &digits, number);

    match money.symbol_location {
        SymbolLocation::Before => format!("{}{}", money.symbol, amount),
        SymbolLocation::After => format!("{}{}", amount, money.symbol),
    }
}

/// Round to the given number of fractional digits, half away from zero.
fn round_to(value: f64, decimals: u32) -> f64 {
    let multiplier = 10_f64.powi(decimals as i32);
    let scaled = value * multiplier;
    if !scaled.is_finite() || !multiplier.is_finite() {
        return value;
    }
    scaled.round() / multiplier
}

/// Build the final string from a sign and an unsigned decimal rendering.
fn assemble(negative: bool, digits: &str, settings: &NumberSettings) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(integer, settings.digit_separator.as_str()));

    if let Some(fraction) = fraction {
        result.push(settings.decimal_separator.as_char());
        result.push_str(fraction);
    }

    result
}

/// Insert `separator` between groups of three digits, counting from the right.
pub fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    if separator.is_empty() || len <= 3 {
        return integer.to_string();
    }

    let mut result = String::with_capacity(len + (len - 1) / 3 * separator.len());
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}
