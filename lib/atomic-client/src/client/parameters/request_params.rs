use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::CallHeaders;

/// Ambient, call-scoped settings.
///
/// These settings are independent of the operation payload and apply uniformly to any call:
///
/// - `timeout`: deadline applied to the outbound exchange,
/// - `headers`: overrides applied last, they win over every default header,
/// - `no_auth`: suppresses the automatic `Authorization` header,
/// - `expand` / `fields`: expansion and field-selection directives,
/// - `instance`: tenant scope, sent as the `Atomic-Instance` header.
///
/// ```rust
/// use std::time::Duration;
/// use atomic_client::RequestParams;
///
/// let params = RequestParams::new()
///     .with_instance(" tenant-1 ")
///     .with_expand("owner")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(params.instance(), Some("tenant-1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    timeout: Option<Duration>,
    headers: CallHeaders,
    no_auth: bool,
    expand: Vec<String>,
    fields: Vec<String>,
    instance: Option<String>,
}

impl RequestParams {
    /// Creates empty ambient settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deadline of the exchange.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header override.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers = self.headers.add_header(name, value);
        self
    }

    /// Merges header overrides, the new ones take precedence.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = self.headers.merge(headers);
        self
    }

    /// Suppresses the automatic bearer authentication.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.no_auth = true;
        self
    }

    /// Requests the expansion of a related field.
    #[must_use]
    pub fn with_expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Restricts the returned fields.
    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Scopes the call to a tenant instance.
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Layers `other` over these settings.
    ///
    /// Settings present in `other` win, header overrides are merged, and auth
    /// stays suppressed if either side suppresses it.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let pick = |mine: Vec<String>, theirs: Vec<String>| {
            if theirs.is_empty() { mine } else { theirs }
        };
        Self {
            timeout: other.timeout.or(self.timeout),
            headers: self.headers.merge(other.headers),
            no_auth: self.no_auth || other.no_auth,
            expand: pick(self.expand, other.expand),
            fields: pick(self.fields, other.fields),
            instance: other.instance.or(self.instance),
        }
    }

    /// The deadline of the exchange, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Header overrides.
    pub fn headers(&self) -> &CallHeaders {
        &self.headers
    }

    /// Returns `true` if the bearer authentication is suppressed.
    pub fn is_auth_suppressed(&self) -> bool {
        self.no_auth
    }

    /// Expansion directives.
    pub fn expand(&self) -> &[String] {
        &self.expand
    }

    /// Field selection directives.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The trimmed tenant scope, `None` when absent or blank.
    pub fn instance(&self) -> Option<&str> {
        self.instance
            .as_deref()
            .map(str::trim)
            .filter(|instance| !instance.is_empty())
    }
}

/// Pagination directives, flattened into list inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Maximum number of items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl ListParams {
    /// A page of `limit` items starting at `offset`.
    pub fn page(limit: u64, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}
