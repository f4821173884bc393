//! Error types for decoding and coercion.
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Why a value could not be coerced to the requested number type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The value's kind has no coercion rule (bool, null, array, object).
    #[error("invalid value type")]
    InvalidType,

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// Finite number text too large for an `f64`.
    #[error("value out of range: {text:?}")]
    OutOfRange { text: String },

    /// A sign prefix on text parsed as unsigned.
    #[error("invalid sign in unsigned number: {text:?}")]
    UnexpectedSign { text: String },

    /// A string-parsing helper was handed something other than a string.
    #[error("unable to parse, value not string: {found}")]
    NotAString { found: &'static str },
}

/// Failure to turn JSON text into a [`crate::Value`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An NDJSON line (1-based) that failed to decode.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
