//! Distinct-character extraction.
//!
//! [`extract_alphabet`] is the typed entry point and cannot fail: a `&str`
//! is always a valid text value. Input that arrives untyped (raw bytes,
//! JSON values) goes through the fallible variants, which reject anything
//! that is not text with [`AlphabetError::InvalidArgument`] instead of
//! coercing it.

use serde_json::Value;
use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, AlphabetResult};

/// Returns the distinct characters of `input` in ascending code-value
/// order, without `\r`, `\n` or `\t`.
///
/// ```
/// use alphagen_core::extract_alphabet;
///
/// assert_eq!(extract_alphabet("bca"), "abc");
/// assert_eq!(extract_alphabet("a\tb\nc\r"), "abc");
/// ```
pub fn extract_alphabet(input: &str) -> String {
    Alphabet::from_text(input).render()
}

/// Like [`extract_alphabet`], for input that must first be decoded as UTF-8.
pub fn extract_alphabet_from_bytes(input: &[u8]) -> AlphabetResult<String> {
    Alphabet::from_utf8(input).map(|alphabet| alphabet.render())
}

/// Like [`extract_alphabet`], for a JSON value that must be a string.
///
/// `null` and every non-string value are rejected.
pub fn extract_alphabet_from_value(value: &Value) -> AlphabetResult<String> {
    Alphabet::from_json_value(value).map(|alphabet| alphabet.render())
}

impl Alphabet {
    /// Collects the alphabet of UTF-8 encoded bytes.
    pub fn from_utf8(input: &[u8]) -> AlphabetResult<Self> {
        let text = std::str::from_utf8(input).map_err(|e| {
            trace!(error = %e, "Rejecting non-UTF-8 input");
            AlphabetError::invalid_argument(format!("input is not valid UTF-8: {e}"))
        })?;
        Ok(Self::from_text(text))
    }

    /// Collects the alphabet of a JSON string value.
    pub fn from_json_value(value: &Value) -> AlphabetResult<Self> {
        match value {
            Value::String(text) => Ok(Self::from_text(text)),
            other => {
                let kind = value_kind(other);
                trace!(kind, "Rejecting non-string value");
                Err(AlphabetError::invalid_argument(format!(
                    "expected a string, got {kind}"
                )))
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
