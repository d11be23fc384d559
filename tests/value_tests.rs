use chrono::{NaiveDate, TimeZone, Utc};
use valfmt::Value;

#[test]
fn test_value_from_f64() {
    let v: Value = 42.5.into();
    assert!(matches!(v, Value::Number(n) if (n - 42.5).abs() < f64::EPSILON));
}

#[test]
fn test_value_from_i64() {
    let v: Value = 42i64.into();
    assert!(matches!(v, Value::Number(n) if (n - 42.0).abs() < f64::EPSILON));
}

#[test]
fn test_value_from_unsigned() {
    let v: Value = 1234u64.into();
    assert!(matches!(v, Value::Number(n) if n == 1234.0));
    let v: Value = 7usize.into();
    assert!(matches!(v, Value::Number(n) if n == 7.0));
}

#[test]
fn test_value_from_str() {
    let v: Value = "hello".into();
    assert!(matches!(v, Value::Text(s) if s == "hello"));
}

#[test]
fn test_value_from_option() {
    let v: Value = None::<f64>.into();
    assert!(v.is_empty());
    let v: Value = Some(3).into();
    assert_eq!(v, Value::Number(3.0));
}

#[test]
fn test_value_from_dates() {
    let utc = Utc.with_ymd_and_hms(2026, 1, 9, 0, 0, 0).unwrap();
    let v: Value = utc.into();
    assert!(v.is_date());
    assert_eq!(v.type_name(), "datetime");

    let v: Value = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap().into();
    assert_eq!(v.as_datetime().unwrap(), Some(utc.fixed_offset()));
}

#[test]
fn test_value_from_zoned_datetime() {
    let tz: chrono_tz::Tz = "Europe/Amsterdam".parse().unwrap();
    let local = tz.with_ymd_and_hms(2026, 1, 9, 12, 0, 0).unwrap();
    let v: Value = local.into();
    let dt = v.as_datetime().unwrap().unwrap();
    assert_eq!(dt.offset().local_minus_utc(), 3600);
}
