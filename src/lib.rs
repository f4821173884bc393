//! Schema-less access to decoded JSON with lenient numeric coercion.
//!
//! ```
//! let doc = json_coerce::decode::from_str(r#"["7", 7, "7"]"#).unwrap();
//! let json_coerce::Value::Array(xs) = doc else { unreachable!() };
//! for x in &xs {
//!     assert_eq!(x.as_i64().unwrap(), 7);
//! }
//! ```
pub mod value;
pub mod coerce;
pub mod decode;
pub mod error;

pub use value::{Float, NumberLiteral, SignedInt, UnsignedInt, Value};
pub use error::{CoerceError, DecodeError};
