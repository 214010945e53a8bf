//! Request parameter types for building API calls.
//!
//! - [`CallPath`] - REST path templates with identifier substitution (e.g. `/users/{user_id}`)
//! - [`CallQuery`] - Flattened query-string form of a payload
//! - [`CallHeaders`] - Header overrides
//! - [`CallBody`] - Pre-encoded request bodies (JSON, multipart uploads)
//! - [`RequestParams`] - Ambient, call-scoped settings
//! - [`MethodParams`] - Operation payload capability

mod path;
pub use self::path::CallPath;
pub(in crate::client) use self::path::PathResolved;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod body;
pub use self::body::CallBody;

mod request_params;
pub use self::request_params::{ListParams, RequestParams};

mod method_params;
pub use self::method_params::{MethodParams, NoParams, Validate, ValidationError};
