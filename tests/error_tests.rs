use std::error::Error;

use valfmt::{ConvertError, ErrorKind, ParseError};

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnknownToken {
        position: 5,
        found: 'x',
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'x'"));
}

#[test]
fn test_convert_error_source() {
    let err = ConvertError::InvalidDateFormat {
        pattern: "qq".to_string(),
        source: ParseError::UnknownToken {
            position: 0,
            found: 'q',
        },
    };
    assert!(err.to_string().contains("'qq'"));
    assert!(err.source().is_some());
}

#[test]
fn test_error_kinds() {
    assert_eq!(ConvertError::MissingSettings.kind(), ErrorKind::Configuration);
    assert_eq!(
        ConvertError::UnknownTimezone("X".into()).kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ConvertError::TypeMismatch {
            expected: "date",
            got: "number"
        }
        .kind(),
        ErrorKind::TypeArgument
    );
    assert_eq!(
        ConvertError::InvalidNumber {
            value: "NaN".into()
        }
        .kind(),
        ErrorKind::InvalidValue
    );
}
