use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use super::AtomicError;

/// Metadata of the last response received for a call.
///
/// Recorded for successful calls and for calls rejected with a status `>= 400`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastResponse {
    pub(super) status: StatusCode,
    pub(super) status_line: String,
    pub(super) headers: HeaderMap,
    pub(super) body: Bytes,
}

impl LastResponse {
    pub(super) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => status.as_u16().to_string(),
        };
        Self {
            status,
            status_line,
            headers,
            body,
        }
    }

    pub(super) async fn read(response: reqwest::Response) -> Result<Self, AtomicError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    /// The status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The status line, e.g. `200 OK`.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The response content type, if declared and valid.
    pub fn content_type(&self) -> Option<ContentType> {
        self.headers.typed_get::<ContentType>()
    }

    /// The raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns `true` when the body is empty or only whitespace.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Decodes the body, an empty body yields `T::default()`.
    pub(super) fn decode<T>(&self) -> Result<T, AtomicError>
    where
        T: DeserializeOwned + Default,
    {
        if self.is_empty() {
            return Ok(T::default());
        }
        let deserializer = &mut serde_json::Deserializer::from_slice(&self.body);
        serde_path_to_error::deserialize(deserializer).map_err(|err| AtomicError::Decode {
            path: err.path().to_string(),
            error: err.into_inner(),
            body: String::from_utf8_lossy(&self.body).into_owned(),
        })
    }
}

/// Response envelope: the decoded payload and the last response metadata.
///
/// The payload shape is the type parameter: a single entity, a `Vec` of entities,
/// or `()` for operations without a response body.
///
/// ```rust
/// # use atomic_client::Resource;
/// fn describe(resource: &Resource<Vec<String>>) -> String {
///     format!("{} items ({})", resource.value().len(), resource.last_response().status_line())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resource<T> {
    value: T,
    response: LastResponse,
}

impl<T> Resource<T> {
    pub(super) fn new(value: T, response: LastResponse) -> Self {
        Self { value, response }
    }

    /// A reference to the decoded payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Takes the decoded payload.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The last response metadata.
    pub fn last_response(&self) -> &LastResponse {
        &self.response
    }

    /// Splits the envelope.
    pub fn into_parts(self) -> (T, LastResponse) {
        (self.value, self.response)
    }
}

impl<T> AsRef<T> for Resource<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
