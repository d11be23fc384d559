use chrono::{TimeZone, Utc};
use valfmt::{
    date_to_date_string, date_to_date_time_string, number_to_money_string,
    number_to_number_string, ErrorKind, MoneySettings, Settings, SymbolLocation, Value,
};

#[test]
fn test_defaults_when_no_settings_given() {
    let dt = Utc.with_ymd_and_hms(2026, 1, 9, 8, 5, 0).unwrap();
    assert_eq!(date_to_date_string(None, dt).unwrap(), "09/01/2026");
    assert_eq!(
        date_to_date_time_string(None, dt, true).unwrap(),
        "09/01/2026 08:05:00"
    );
    assert_eq!(number_to_number_string(None, 1234567).unwrap(), "1.234.567");
}

#[test]
fn test_given_settings_are_used() {
    let settings = Settings {
        date_format: "YYYY/MM/DD".to_string(),
        timezone: "America/New_York".to_string(),
        ..Settings::default()
    };
    let dt = Utc.with_ymd_and_hms(2026, 1, 9, 3, 0, 0).unwrap();
    assert_eq!(date_to_date_string(Some(&settings), dt).unwrap(), "2026/01/09");
    assert_eq!(
        date_to_date_time_string(Some(&settings), dt, true).unwrap(),
        "08/01/2026 22:00:00"
    );
}

#[test]
fn test_money_applies_money_rules() {
    // The free function does the full money conversion, the same as the method
    assert_eq!(number_to_money_string(None, 5).unwrap(), "€5,00");

    let settings = Settings {
        money: MoneySettings {
            symbol: "€".to_string(),
            symbol_location: SymbolLocation::After,
            decimals: 1,
        },
        ..Settings::default()
    };
    assert_eq!(
        number_to_money_string(Some(&settings), 1234.56).unwrap(),
        "1.234,6€"
    );
}

#[test]
fn test_same_errors_as_formatter() {
    assert_eq!(
        date_to_date_string(None, "yesterday").unwrap_err().kind(),
        ErrorKind::TypeArgument
    );
    assert_eq!(
        number_to_number_string(None, "n/a").unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
    assert_eq!(number_to_money_string(None, Value::Empty).unwrap(), "");
    assert_eq!(date_to_date_time_string(None, Value::Empty, false).unwrap(), "");
}
