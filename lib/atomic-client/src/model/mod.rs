//! Entities and operation inputs of the Atomic API.
//!
//! Entities keep their well-known fields typed and preserve every other field in `extra`,
//! so a newer service version never breaks decoding.
//!
//! Inputs carry their path identifiers as `#[serde(skip_serializing)]` fields: identifiers
//! are substituted into the path and never leak into the query string or the body.

use uuid::Uuid;

use crate::ValidationError;

mod account;
pub use self::account::*;

mod billing;
pub use self::billing::*;

mod content;
pub use self::content::*;

mod messaging;
pub use self::messaging::*;

mod platform;
pub use self::platform::*;

/// Free-form metadata attached to most entities.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Fails when `value` is blank.
pub(crate) fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

/// Fails when `id` is the nil UUID, the value of a default-constructed input.
pub(crate) fn required_id(field: &str, id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

/// Loose e-mail address check: one `@` with a non-empty local part and a dotted domain.
pub(crate) fn email(field: &str, value: &str) -> Result<(), ValidationError> {
    let valid = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
    });
    if !valid {
        return Err(ValidationError::new(field, format!("'{value}' is not an e-mail address")));
    }
    Ok(())
}

/// Declares inputs that only carry path identifiers, e.g. `get` and `delete` inputs.
///
/// Every identifier is required: the nil UUID fails validation.
macro_rules! id_input {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($field:ident),+ $(,)? }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
        pub struct $name {
            $(
                #[allow(missing_docs)]
                #[serde(skip_serializing)]
                pub $field: uuid::Uuid,
            )+
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> Result<(), $crate::ValidationError> {
                $($crate::model::required_id(stringify!($field), &self.$field)?;)+
                Ok(())
            }
        }
    )*};
}
pub(crate) use id_input;
