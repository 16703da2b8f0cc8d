//! String to typed-value conversion, shared by default literals in
//! descriptors and by raw query values.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::errors::CoercionError;
use crate::models::models::{TypeKind, Value};

fn decimal_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("Regex should compile")
    })
}

fn radix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^0(?:[xX](?P<hex>[0-9a-fA-F]+)|[oO](?P<oct>[0-7]+)|[bB](?P<bin>[01]+))$")
            .expect("Regex should compile")
    })
}

pub fn coerce(raw: &str, kind: TypeKind) -> Result<Value, CoercionError> {
    match kind {
        TypeKind::String => Ok(Value::String(raw.to_string())),
        TypeKind::Number => parse_number(raw).map(Value::Number),
        TypeKind::Boolean => parse_boolean(raw).map(Value::Boolean),
    }
}

/// Permissive numeric literal: decimal with optional sign, fraction and
/// exponent, signed `Infinity`, or unsigned `0x`/`0o`/`0b` integers.
/// Surrounding whitespace is ignored; blank text is rejected.
pub fn parse_number(raw: &str) -> Result<f64, CoercionError> {
    let invalid = || CoercionError::InvalidNumber {
        raw: raw.to_string(),
    };
    let text = raw.trim();

    match text {
        "" => return Err(invalid()),
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    if decimal_regex().is_match(text) {
        return text.parse::<f64>().map_err(|_| invalid());
    }

    let caps = radix_regex().captures(text).ok_or_else(invalid)?;
    let (digits, radix) = if let Some(m) = caps.name("hex") {
        (m.as_str(), 16)
    } else if let Some(m) = caps.name("oct") {
        (m.as_str(), 8)
    } else if let Some(m) = caps.name("bin") {
        (m.as_str(), 2)
    } else {
        return Err(invalid());
    };

    // Folded as f64 so long literals round instead of overflowing.
    Ok(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}

/// Only the exact lowercase tokens are accepted.
pub fn parse_boolean(raw: &str) -> Result<bool, CoercionError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CoercionError::InvalidBoolean {
            raw: raw.to_string(),
        }),
    }
}
