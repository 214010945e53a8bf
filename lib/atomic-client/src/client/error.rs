use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::parameters::ValidationError;
use super::response::LastResponse;
use super::AuthenticationError;
#[cfg(feature = "oauth2")]
use super::oauth2::OAuth2Error;

/// Errors that can occur when calling the Atomic API.
///
/// Every call either succeeds with a decoded payload or fails with exactly one of these.
/// Nothing is retried. Use [`AtomicError::kind`] to classify an error without matching
/// every variant.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum AtomicError {
    /// The payload failed its own validation, nothing was sent.
    #[display("Validation failed: {_0}")]
    Validation(ValidationError),

    /// JSON serialization of the payload failed.
    #[display("JSON serialization failed: {_0}")]
    JsonSerialization(serde_json::Error),

    /// Query-string encoding of the payload failed.
    #[display("Query serialization failed: {_0}")]
    QuerySerialization(serde_urlencoded::ser::Error),

    /// The payload cannot be flattened into a query string.
    #[display("Query payload must be an object, got {kind}")]
    #[from(skip)]
    UnsupportedQueryPayload {
        /// The JSON kind of the payload.
        kind: &'static str,
    },

    /// Path template contains unresolved identifiers.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing identifier names.
        missings: Vec<String>,
    },

    /// The target URL cannot be built from the configured host.
    InvalidUrl(url::ParseError),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Invalid media type.
    InvalidContentType(mime::FromStrError),

    /// The credential cannot be turned into an `Authorization` header.
    Authentication(AuthenticationError),

    /// OAuth2 token acquisition failed.
    #[cfg(feature = "oauth2")]
    OAuth2(OAuth2Error),

    /// The network exchange failed (DNS, connection, timeout).
    ///
    /// The underlying `reqwest` error is propagated verbatim.
    #[display("{_0}")]
    Transport(reqwest::Error),

    /// The service answered with a status `>= 400`.
    #[display("{_0}")]
    Api(Box<ApiError>),

    /// A successful response body does not match the expected shape.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    Decode {
        /// JSON path of the failure.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// An error response body is not a JSON object.
    #[display("Failed to deserialize {status} error body: {error}\n{body}")]
    #[from(skip)]
    ErrorBodyDecode {
        /// The response status.
        status: StatusCode,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },
}

/// Coarse classification of an [`AtomicError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local payload validation.
    Validation,
    /// Request construction, nothing was sent.
    Build,
    /// Network exchange.
    Transport,
    /// Status `>= 400`.
    Api,
    /// Response body decoding.
    Decode,
}

impl AtomicError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::JsonSerialization(_)
            | Self::QuerySerialization(_)
            | Self::UnsupportedQueryPayload { .. }
            | Self::PathUnresolved { .. }
            | Self::InvalidUrl(_)
            | Self::InvalidHeaderName(_)
            | Self::InvalidHeaderValue(_)
            | Self::InvalidContentType(_)
            | Self::Authentication(_) => ErrorKind::Build,
            #[cfg(feature = "oauth2")]
            Self::OAuth2(_) => ErrorKind::Build,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api(_) => ErrorKind::Api,
            Self::Decode { .. } | Self::ErrorBodyDecode { .. } => ErrorKind::Decode,
        }
    }

    /// The structured API error, if the service rejected the call.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(&**error),
            _ => None,
        }
    }
}

impl From<ApiError> for AtomicError {
    fn from(error: ApiError) -> Self {
        Self::Api(Box::new(error))
    }
}

/// Error payload returned by the service.
///
/// Every field is optional so any JSON object decodes; unknown fields are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine readable error code, e.g. `not_found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Additional detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
    /// Any other field.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A rejected call: status `>= 400`.
///
/// Built from the decoded error body, or from the status line alone when the body is empty.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ApiError {
    body: ApiErrorBody,
    response: LastResponse,
}

impl ApiError {
    pub(super) fn from_response(response: LastResponse) -> Result<Self, AtomicError> {
        let body = if response.is_empty() {
            ApiErrorBody::default()
        } else {
            serde_json::from_slice(&response.body).map_err(|error| {
                AtomicError::ErrorBodyDecode {
                    status: response.status,
                    error,
                    body: String::from_utf8_lossy(&response.body).into_owned(),
                }
            })?
        };
        Ok(Self { body, response })
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    /// The response status line, e.g. `404 Not Found`.
    pub fn status_line(&self) -> &str {
        &self.response.status_line
    }

    /// The service error code.
    pub fn code(&self) -> Option<&str> {
        self.body.code.as_deref()
    }

    /// The service error message.
    pub fn message(&self) -> Option<&str> {
        self.body.message.as_deref()
    }

    /// The decoded error payload.
    pub fn body(&self) -> &ApiErrorBody {
        &self.body
    }

    /// Metadata of the rejected response.
    pub fn last_response(&self) -> &LastResponse {
        &self.response
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.response.status_line)?;
        match (&self.body.code, &self.body.message) {
            (Some(code), Some(message)) => write!(f, ": {code}: {message}"),
            (Some(text), None) | (None, Some(text)) => write!(f, ": {text}"),
            (None, None) => Ok(()),
        }
    }
}
