use url::Url;

use super::{AtomicClient, AtomicError, Authentication, CallHeaders, SecureString};
#[cfg(feature = "oauth2")]
use super::oauth2::OAuth2Config;

/// Default API host.
pub const DEFAULT_API_HOST: &str = "https://api.passport.online";

/// Builder for [`AtomicClient`].
///
/// # Example
///
/// ```rust
/// use atomic_client::AtomicClient;
///
/// let client = AtomicClient::builder()
///     .with_host("https://api.example.com")
///     .with_bearer_token("api-key")
///     .with_default_header("User-Agent", "my-app/1.0")
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(client.base_url().as_str(), "https://api.example.com/");
/// ```
#[derive(Debug, Clone)]
pub struct AtomicClientBuilder {
    client: reqwest::Client,
    host: String,
    authentication: Option<Authentication>,
    default_headers: CallHeaders,
}

impl AtomicClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the host is not an absolute URL.
    pub fn build(self) -> Result<AtomicClient, AtomicError> {
        let Self {
            client,
            host,
            authentication,
            default_headers,
        } = self;

        let base_url = Url::parse(&host)?;

        Ok(AtomicClient {
            client,
            base_url,
            authentication,
            default_headers,
        })
    }

    /// Sets the API host, e.g. `https://api.passport.online`.
    ///
    /// A host with a path prefix is supported: paths are appended to it.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Authenticates every call with a static bearer token (API key).
    #[must_use]
    pub fn with_bearer_token(self, token: impl Into<SecureString>) -> Self {
        self.with_authentication(Authentication::Bearer(token.into()))
    }

    /// Authenticates every call with OAuth2 client credentials.
    #[cfg(feature = "oauth2")]
    #[must_use]
    pub fn with_oauth2(self, config: OAuth2Config) -> Self {
        self.with_authentication(Authentication::OAuth2(config))
    }

    /// Sets the credential.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Uses a custom HTTP client (proxy, TLS, timeouts, ...).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Adds a header sent with every call.
    ///
    /// Per-call overrides from [`RequestParams`](super::RequestParams) still win.
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }
}

impl Default for AtomicClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            host: DEFAULT_API_HOST.to_string(),
            authentication: None,
            default_headers: CallHeaders::new(),
        }
    }
}
