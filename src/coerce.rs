//! Lenient numeric coercion over [`Value`].
//!
//! Each accessor walks the same rule order:
//! number literal → native float → native signed → native unsigned → string.
//! Anything else is [`CoerceError::InvalidType`].
//!
//! Casts between native numbers never fail: they follow Rust's `as`
//! semantics (wrap on integer narrowing, truncate toward zero from floats).
use crate::error::CoerceError;
use crate::value::Value;

impl Value {
    /// Coerce into an `f64`.
    pub fn as_f64(&self) -> Result<f64, CoerceError> {
        match self {
            Value::Number(n) => parse_f64(n.as_str()),
            Value::Float(x) => Ok(x.to_f64()),
            Value::Int(x) => Ok(x.to_i64() as f64),
            Value::Uint(x) => Ok(x.to_u64() as f64),
            Value::String(_) => f64_from_string(self),
            _ => Err(CoerceError::InvalidType),
        }
    }

    /// Coerce into a platform-width `isize`.
    ///
    /// Literals are parsed exactly as `i64` and then narrowed.
    pub fn as_int(&self) -> Result<isize, CoerceError> {
        match self {
            Value::Number(n) => Ok(n.as_str().parse::<i64>()? as isize),
            Value::Float(x) => Ok(x.to_f64() as isize),
            Value::Int(x) => Ok(x.to_i64() as isize),
            Value::Uint(x) => Ok(x.to_u64() as isize),
            Value::String(_) => int_from_string(self),
            _ => Err(CoerceError::InvalidType),
        }
    }

    /// Coerce into an `i64`.
    pub fn as_i64(&self) -> Result<i64, CoerceError> {
        match self {
            Value::Number(n) => Ok(n.as_str().parse::<i64>()?),
            Value::Float(x) => Ok(x.to_f64() as i64),
            Value::Int(x) => Ok(x.to_i64()),
            Value::Uint(x) => Ok(x.to_u64() as i64),
            Value::String(_) => i64_from_string(self),
            _ => Err(CoerceError::InvalidType),
        }
    }

    /// Coerce into a `u64`.
    ///
    /// Literals go straight through the unsigned parser, so `-5` is rejected
    /// and the full `u64` range survives.
    pub fn as_u64(&self) -> Result<u64, CoerceError> {
        match self {
            Value::Number(n) => parse_u64(n.as_str()),
            Value::Float(x) => Ok(x.to_f64() as u64),
            Value::Int(x) => Ok(x.to_i64() as u64),
            Value::Uint(x) => Ok(x.to_u64()),
            Value::String(_) => u64_from_string(self),
            _ => Err(CoerceError::InvalidType),
        }
    }
}

// ---------------------------- string fallbacks ---------------------------- //

fn string_text(raw: &Value) -> Result<&str, CoerceError> {
    match raw {
        Value::String(s) => Ok(s),
        other => Err(CoerceError::NotAString { found: other.type_name() }),
    }
}

/// Finite text that overflows to infinity is out of range. Only the
/// explicit `inf`/`infinity` spellings may produce one.
fn parse_f64(text: &str) -> Result<f64, CoerceError> {
    let x = text.parse::<f64>()?;
    if x.is_infinite() {
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let explicit = unsigned.eq_ignore_ascii_case("inf")
            || unsigned.eq_ignore_ascii_case("infinity");
        if !explicit {
            return Err(CoerceError::OutOfRange { text: text.to_owned() });
        }
    }
    Ok(x)
}

/// Unsigned text takes no sign at all, `+` included.
fn parse_u64(text: &str) -> Result<u64, CoerceError> {
    if text.starts_with('+') {
        return Err(CoerceError::UnexpectedSign { text: text.to_owned() });
    }
    Ok(text.parse::<u64>()?)
}

pub fn f64_from_string(raw: &Value) -> Result<f64, CoerceError> {
    parse_f64(string_text(raw)?)
}

/// Parses with `i128` and narrows to `isize`. Out-of-range text wraps
/// silently instead of failing.
pub fn int_from_string(raw: &Value) -> Result<isize, CoerceError> {
    Ok(string_text(raw)?.parse::<i128>()? as isize)
}

/// Same wrapping behavior as [`int_from_string`], narrowed to `i64`.
pub fn i64_from_string(raw: &Value) -> Result<i64, CoerceError> {
    Ok(string_text(raw)?.parse::<i128>()? as i64)
}

pub fn u64_from_string(raw: &Value) -> Result<u64, CoerceError> {
    parse_u64(string_text(raw)?)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
