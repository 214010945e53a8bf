use serde::Serialize;
use serde_json::Value;

use crate::client::error::AtomicError;

/// Flattened query-string form of a payload.
///
/// Built from any `Serialize` value that renders as a JSON object:
///
/// - `null` values and empty strings are skipped,
/// - numbers and booleans use their display form,
/// - arrays become repeated keys (`tag=a&tag=b`),
/// - nested objects use bracketed keys (`filter[state]=open`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallQuery {
    pairs: Vec<(String, String)>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a serializable payload.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized, or if it is not an object.
    pub fn from_serialize<T: Serialize + ?Sized>(payload: &T) -> Result<Self, AtomicError> {
        let value = serde_json::to_value(payload)?;
        Self::from_value(&value)
    }

    /// Flattens an already serialized payload.
    ///
    /// # Errors
    ///
    /// Fails if `value` is neither an object nor `null`.
    pub fn from_value(value: &Value) -> Result<Self, AtomicError> {
        let mut query = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, value) in map {
                    query.flatten(key, value);
                }
            }
            other => {
                return Err(AtomicError::UnsupportedQueryPayload {
                    kind: json_kind(other),
                });
            }
        }
        Ok(query)
    }

    fn flatten(&mut self, key: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::String(text) if text.is_empty() => {}
            Value::String(text) => self.push(key, text.clone()),
            Value::Bool(flag) => self.push(key, flag.to_string()),
            Value::Number(number) => self.push(key, number.to_string()),
            Value::Array(items) => {
                for item in items {
                    self.flatten(key, item);
                }
            }
            Value::Object(map) => {
                for (child, value) in map {
                    self.flatten(&format!("{key}[{child}]"), value);
                }
            }
        }
    }

    /// Appends a pair, keeping existing pairs for the same key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Appends every pair of `other`.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Returns `true` if no pair would be encoded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The flattened pairs, in serialization order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Fails if the url encoder rejects the pairs.
    pub fn encode(&self) -> Result<String, AtomicError> {
        let encoded = serde_urlencoded::to_string(&self.pairs)?;
        Ok(encoded)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
