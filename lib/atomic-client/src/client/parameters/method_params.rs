use serde::Serialize;
use serde_json::Value;

use super::CallQuery;
use crate::client::error::AtomicError;

/// A payload that failed its own validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid '{field}': {reason}")]
pub struct ValidationError {
    field: String,
    reason: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the field is invalid.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Self-validation of an operation payload.
///
/// The default implementation accepts everything.
pub trait Validate {
    /// Checks the payload before any request is built.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Capability of an operation payload: validate itself, and serialize to JSON and query forms.
///
/// This trait is object safe so a call can hold any payload behind a reference.
/// It is implemented for every `Serialize + Validate` type.
pub trait MethodParams: Send + Sync {
    /// Checks the payload before any request is built.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    fn validate(&self) -> Result<(), ValidationError>;

    /// JSON form, used for request bodies.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized.
    fn to_json(&self) -> Result<Value, AtomicError>;

    /// Flattened form, used for query strings.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized or is not an object.
    fn to_query(&self) -> Result<CallQuery, AtomicError>;
}

impl<T> MethodParams for T
where
    T: Serialize + Validate + Send + Sync,
{
    fn validate(&self) -> Result<(), ValidationError> {
        Validate::validate(self)
    }

    fn to_json(&self) -> Result<Value, AtomicError> {
        let value = serde_json::to_value(self)?;
        Ok(value)
    }

    fn to_query(&self) -> Result<CallQuery, AtomicError> {
        CallQuery::from_serialize(self)
    }
}

/// Empty payload, for operations without input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

impl Validate for NoParams {}
