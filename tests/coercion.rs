use typed_params::coerce::{coerce, parse_boolean, parse_number};
use typed_params::{CoercionError, TypeKind, Value};

#[test]
fn test_number_literal_forms() {
    let cases = [
        ("0", 0.0),
        ("4", 4.0),
        ("-1", -1.0),
        ("+3.5", 3.5),
        (".5", 0.5),
        ("5.", 5.0),
        ("1e3", 1000.0),
        ("2.5E-1", 0.25),
        (" 42 ", 42.0),
        ("0x1F", 31.0),
        ("0o17", 15.0),
        ("0b101", 5.0),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_number(text), Ok(expected), "parsing {:?}", text);
    }
    assert_eq!(parse_number("Infinity"), Ok(f64::INFINITY));
    assert_eq!(parse_number("-Infinity"), Ok(f64::NEG_INFINITY));
}

#[test]
fn test_number_rejects_non_numeric_text() {
    for text in ["", "   ", "7h2", "abc", "NaN", "nan", "inf", "1,5", "--1", "-0x10", "0xZZ", "1e", "."] {
        assert_eq!(
            parse_number(text),
            Err(CoercionError::InvalidNumber { raw: text.to_string() }),
            "parsing {:?}",
            text
        );
    }
}

#[test]
fn test_boolean_tokens() {
    assert_eq!(parse_boolean("true"), Ok(true));
    assert_eq!(parse_boolean("false"), Ok(false));
    for text in ["TRUE", "False", "1", "0", "yes", " true", ""] {
        assert!(matches!(
            parse_boolean(text),
            Err(CoercionError::InvalidBoolean { .. })
        ));
    }
}

#[test]
fn test_string_is_identity() {
    assert_eq!(
        coerce(" spaced %20 text ", TypeKind::String),
        Ok(Value::String(" spaced %20 text ".into()))
    );
}

#[test]
fn test_error_keeps_raw_text() {
    let err = coerce("7h2", TypeKind::Number).unwrap_err();
    assert_eq!(err.raw(), "7h2");
    assert_eq!(err.to_string(), "could not parse number: \"7h2\"");
}
