//! JSON text → [`Value`].
//!
//! Thin wrappers over serde_json. The crate enables `arbitrary_precision`, so
//! numbers arrive as exact [`crate::NumberLiteral`] text.
use std::io::{BufRead, Read};
use serde::de::DeserializeOwned;
use crate::error::DecodeError;
use crate::value::Value;

pub fn from_str(src: &str) -> Result<Value, DecodeError> {
    let value = serde_json::from_str::<Value>(src)?;
    tracing::debug!(kind = value.type_name(), bytes = src.len(), "decoded document");
    Ok(value)
}

pub fn from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    let value = serde_json::from_slice::<Value>(bytes)?;
    tracing::debug!(kind = value.type_name(), bytes = bytes.len(), "decoded document");
    Ok(value)
}

/// Decode exactly one document from a reader. Trailing non-whitespace is an
/// error.
pub fn from_reader<R: Read>(reader: R) -> Result<Value, DecodeError> {
    let value = serde_json::from_reader::<_, Value>(reader)?;
    tracing::debug!(kind = value.type_name(), "decoded document");
    Ok(value)
}

/// Newline-delimited JSON: one document per non-blank line.
///
/// Generic over the document type so callers can also collect raw
/// `serde_json::Value`s; numbers keep their source text either way.
pub fn ndjson_from_reader<T, R>(reader: R) -> Result<Vec<T>, DecodeError>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut out = Vec::new();
    for (ix, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str::<T>(&line)
            .map_err(|source| DecodeError::Line { line: ix + 1, source })?;
        out.push(value);
    }
    tracing::debug!(documents = out.len(), "decoded ndjson stream");
    Ok(out)
}
