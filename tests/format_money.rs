use valfmt::{
    ConvertError, DecimalSeparator, DigitSeparator, ErrorKind, Formatter, MoneySettings,
    NumberSettings, Settings, SymbolLocation, Value,
};

#[test]
fn test_default_money() {
    let fmt = Formatter::default();
    assert_eq!(fmt.number_to_money_string(5).unwrap(), "€5,00");
    assert_eq!(fmt.number_to_money_string(1234.5).unwrap(), "€1.234,50");
    assert_eq!(fmt.number_to_money_string(1234567.891).unwrap(), "€1.234.567,89");
}

#[test]
fn test_money_rounds_to_decimals() {
    let fmt = Formatter::default();
    assert_eq!(fmt.number_to_money_string(0.125).unwrap(), "€0,13");
    assert_eq!(fmt.number_to_money_string(2.999).unwrap(), "€3,00");
    assert_eq!(fmt.number_to_money_string(-1234.5).unwrap(), "€-1.234,50");
}

#[test]
fn test_money_symbol_after() {
    let fmt = Formatter::new(Settings {
        money: MoneySettings {
            symbol: " kr".to_string(),
            symbol_location: SymbolLocation::After,
            decimals: 0,
        },
        number: NumberSettings {
            decimal_separator: DecimalSeparator::Dot,
            digit_separator: DigitSeparator::None,
        },
        ..Settings::default()
    });
    assert_eq!(fmt.number_to_money_string(15499.6).unwrap(), "15500 kr");
}

#[test]
fn test_money_empty_value() {
    let fmt = Formatter::default();
    assert_eq!(fmt.number_to_money_string(Value::Empty).unwrap(), "");
    assert_eq!(fmt.number_to_money_string(None::<i32>).unwrap(), "");
}

#[test]
fn test_money_invalid_value() {
    let fmt = Formatter::default();
    let err = fmt.number_to_money_string("ten euro").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidNumber { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_money_with_huge_decimals_does_not_panic() {
    let fmt = Formatter::new(Settings {
        money: MoneySettings {
            decimals: 70_000,
            ..MoneySettings::default()
        },
        ..Settings::default()
    });
    let formatted = fmt.number_to_money_string(5).unwrap();
    assert!(formatted.starts_with("€5,000"));
    assert_eq!(
        formatted.len(),
        "€5,".len() + valfmt::MAX_MONEY_DECIMALS as usize
    );
}
