//! JSON codec at the store boundary.
//!
//! [`parse`] turns a raw stored string into a typed value or a
//! [`ParseError`]. It never picks a fallback itself: callers decide what a
//! malformed record degrades to, usually through [`decode_or_else`].

use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Why a stored value could not be decoded.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The raw string is not JSON at all
    #[error("stored value is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    /// Valid JSON, but not the shape the reader expects
    #[error("stored value has an unexpected shape: {source}")]
    UnexpectedShape {
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a raw stored value.
pub fn parse<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| ParseError::InvalidJson { source })?;
    serde_json::from_value(value).map_err(|source| ParseError::UnexpectedShape { source })
}

/// Encode a value for storage.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode `raw` if present, otherwise or on failure return `fallback()`.
///
/// A malformed value is logged with its key and replaced, it is never
/// surfaced as an error.
pub fn decode_or_else<T, F>(key: &str, raw: Option<&str>, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = raw else {
        return fallback();
    };
    match parse(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed value under '{key}': {e}");
            fallback()
        }
    }
}
