//! Type coercion.
//!
//! [`coerce`] maps a raw value onto a declared [`PrefType`]. It is used on
//! every write and (by default) on every read, and it never fails: values
//! that cannot be interpreted fall back to the target kind's zero value.
//!
//! | Target | Rule |
//! |--------|------|
//! | `String` | Render the value as text |
//! | `Boolean` | `"true"` is true, booleans pass through, anything else is "numeric value != 0" |
//! | `Integer` | Truncate floats, parse the leading integer of strings |
//! | `Float` | Parse the leading number of strings |
//! | `Symbol` | Use the value's text as the symbol name |
//! | `Option(base)` | Coerce to `base`; membership is the accessor's job |
//! | `Untyped` | Pass through |
//!
//! An absent input (`None`) always stays absent. Floats always come out
//! finite: infinities saturate to `f64::MAX`/`f64::MIN` and NaN becomes 0.0,
//! so every coerced value survives a JSON round trip.

use crate::meta::PrefType;
use crate::value::{PrefValue, ScalarType, Symbol};

/// Coerce `raw` to the declared type.
pub fn coerce(raw: Option<&PrefValue>, pref_type: PrefType) -> Option<PrefValue> {
    raw.map(|raw| coerce_value(raw, pref_type))
}

/// Coerce a present value to the declared type.
pub fn coerce_value(raw: &PrefValue, pref_type: PrefType) -> PrefValue {
    match pref_type.base() {
        Some(kind) => to_kind(raw, kind),
        None => match raw {
            PrefValue::Float(f) => PrefValue::Float(saturate(*f)),
            other => other.clone(),
        },
    }
}

fn to_kind(raw: &PrefValue, kind: ScalarType) -> PrefValue {
    match kind {
        ScalarType::String => PrefValue::String(raw.to_string()),
        ScalarType::Boolean => PrefValue::Boolean(to_bool(raw)),
        ScalarType::Integer => PrefValue::Integer(to_integer(raw)),
        ScalarType::Float => PrefValue::Float(to_float(raw)),
        ScalarType::Symbol => PrefValue::Symbol(to_symbol(raw)),
    }
}

fn to_bool(raw: &PrefValue) -> bool {
    match raw {
        PrefValue::Boolean(b) => *b,
        PrefValue::String(s) if s == "true" => true,
        PrefValue::Symbol(s) if s.as_str() == "true" => true,
        other => to_integer(other) != 0,
    }
}

fn to_integer(raw: &PrefValue) -> i64 {
    match raw {
        PrefValue::Integer(i) => *i,
        // `as` truncates toward zero, saturates out of range and maps NaN to 0.
        PrefValue::Float(f) => *f as i64,
        PrefValue::Boolean(b) => i64::from(*b),
        PrefValue::String(s) => parse_integer_prefix(s),
        PrefValue::Symbol(s) => parse_integer_prefix(s.as_str()),
    }
}

fn to_float(raw: &PrefValue) -> f64 {
    let f = match raw {
        PrefValue::Float(f) => *f,
        PrefValue::Integer(i) => *i as f64,
        PrefValue::Boolean(b) => f64::from(u8::from(*b)),
        PrefValue::String(s) => parse_float_prefix(s),
        PrefValue::Symbol(s) => parse_float_prefix(s.as_str()),
    };
    saturate(f)
}

/// JSON has no representation for infinities or NaN.
fn saturate(f: f64) -> f64 {
    if f.is_nan() {
        0.0
    } else {
        f.clamp(f64::MIN, f64::MAX)
    }
}

fn to_symbol(raw: &PrefValue) -> Symbol {
    match raw {
        PrefValue::Symbol(s) => s.clone(),
        other => Symbol::new(other.to_string()),
    }
}

/// Parse the leading integer of `s`: `"12abc"` is 12, `"abc"` is 0.
fn parse_integer_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

/// Parse the leading decimal number of `s`: `"392.888kg"` is 392.888,
/// `"abc"` is 0.0.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    end += digits_from(end);

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
