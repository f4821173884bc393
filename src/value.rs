//! Closed value model for decoded JSON-like documents.
//!
//! Numbers coming out of the decoder stay as [`NumberLiteral`] text until a
//! caller asks for a concrete type. Native numeric variants exist so values
//! built in Rust (or by other decoders) can carry their original width.
use std::fmt;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// One decoded value. Objects keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    String(String),
    /// Exact source text of a JSON number.
    Number(NumberLiteral),
    Int(SignedInt),
    Uint(UnsignedInt),
    Float(Float),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

/// String-backed number token, parsed only on request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberLiteral(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignedInt {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsignedInt {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Value {
    /// Runtime type name, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Int(SignedInt::I8(_)) => "i8",
            Value::Int(SignedInt::I16(_)) => "i16",
            Value::Int(SignedInt::I32(_)) => "i32",
            Value::Int(SignedInt::I64(_)) => "i64",
            Value::Int(SignedInt::Isize(_)) => "isize",
            Value::Uint(UnsignedInt::U8(_)) => "u8",
            Value::Uint(UnsignedInt::U16(_)) => "u16",
            Value::Uint(UnsignedInt::U32(_)) => "u32",
            Value::Uint(UnsignedInt::U64(_)) => "u64",
            Value::Uint(UnsignedInt::Usize(_)) => "usize",
            Value::Float(Float::F32(_)) => "f32",
            Value::Float(Float::F64(_)) => "f64",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl NumberLiteral {
    /// Wraps number text as-is. No validation happens here; parse errors
    /// surface when the literal is coerced.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The `as` casts below are the whole conversion contract: widening is exact,
// narrowing wraps, float to int truncates toward zero (saturating at the
// target bounds, NaN -> 0).

impl SignedInt {
    pub fn to_i64(self) -> i64 {
        match self {
            SignedInt::I8(x) => x as i64,
            SignedInt::I16(x) => x as i64,
            SignedInt::I32(x) => x as i64,
            SignedInt::I64(x) => x,
            SignedInt::Isize(x) => x as i64,
        }
    }
}

impl UnsignedInt {
    pub fn to_u64(self) -> u64 {
        match self {
            UnsignedInt::U8(x) => x as u64,
            UnsignedInt::U16(x) => x as u64,
            UnsignedInt::U32(x) => x as u64,
            UnsignedInt::U64(x) => x,
            UnsignedInt::Usize(x) => x as u64,
        }
    }
}

impl Float {
    pub fn to_f64(self) -> f64 {
        match self {
            Float::F32(x) => x as f64,
            Float::F64(x) => x,
        }
    }
}

// ---------------------------- From conversions ---------------------------- //

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident($inner:ident::$tag:ident)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(x: $ty) -> Self {
                    Value::$variant($inner::$tag(x))
                }
            }
        )*
    };
}

impl_from_native! {
    i8 => Int(SignedInt::I8),
    i16 => Int(SignedInt::I16),
    i32 => Int(SignedInt::I32),
    i64 => Int(SignedInt::I64),
    isize => Int(SignedInt::Isize),
    u8 => Uint(UnsignedInt::U8),
    u16 => Uint(UnsignedInt::U16),
    u32 => Uint(UnsignedInt::U32),
    u64 => Uint(UnsignedInt::U64),
    usize => Uint(UnsignedInt::Usize),
    f32 => Float(Float::F32),
    f64 => Float(Float::F64),
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::String(x.to_owned())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Value::String(x)
    }
}

impl From<NumberLiteral> for Value {
    fn from(x: NumberLiteral) -> Self {
        Value::Number(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(xs: Vec<Value>) -> Self {
        Value::Array(xs)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(m: IndexMap<String, Value>) -> Self {
        Value::Object(m)
    }
}

/// serde_json (with `arbitrary_precision`) keeps the number's source text,
/// so every number becomes a [`NumberLiteral`].
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(NumberLiteral(n.to_string())),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(xs) => {
                Value::Array(xs.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(m) => {
                Value::Object(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_keep_source_text() {
        let v = Value::from(json!([18446744073709551615u64, 1.50, -0]));
        let Value::Array(xs) = v else { panic!("expected array") };
        let texts: Vec<&str> = xs
            .iter()
            .map(|x| match x {
                Value::Number(n) => n.as_str(),
                other => panic!("expected number, got {}", other.type_name()),
            })
            .collect();
        assert_eq!(texts[0], "18446744073709551615");
        assert_eq!(texts[2], "0");
    }

    #[test]
    fn objects_keep_order() {
        let v: Value = serde_json::from_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let Value::Object(m) = v else { panic!("expected object") };
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn type_names_follow_width() {
        assert_eq!(Value::from(1i8).type_name(), "i8");
        assert_eq!(Value::from(1usize).type_name(), "usize");
        assert_eq!(Value::from(1.0f32).type_name(), "f32");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(NumberLiteral::new("1")).type_name(), "number");
    }

    #[test]
    fn native_widening() {
        assert_eq!(SignedInt::I8(-1).to_i64(), -1);
        assert_eq!(UnsignedInt::U16(65535).to_u64(), 65535);
        assert_eq!(Float::F32(0.5).to_f64(), 0.5);
    }
}
