use std::fmt;
use std::time::Duration;

use url::Url;

use super::error::OAuth2Error;
use super::token::{OAuth2Token, TokenCache};
use crate::client::SecureString;

/// Passport authorization server.
pub const DEFAULT_OAUTH_HOST: &str = "https://auth.passport.online";

/// Passport token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://auth.passport.online/oauth/token";

/// Tokens are renewed this long before they expire.
const DEFAULT_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// How the access token is obtained.
#[derive(Debug, Clone)]
pub(crate) enum Grant {
    /// Client credentials exchanged at the token endpoint, secret sent with basic auth.
    ClientCredentials {
        client_id: String,
        client_secret: SecureString,
        token_url: Url,
    },
    /// A token obtained elsewhere, used until it expires.
    PreAcquired,
}

/// OAuth2 settings of a client.
///
/// Clones share the token cache, so a token acquired through one clone serves them all.
#[derive(Debug, Clone)]
pub struct OAuth2Config {
    pub(crate) grant: Grant,
    pub(crate) scopes: Vec<String>,
    pub(crate) refresh_margin: Duration,
    pub(crate) cache: TokenCache,
    pub(crate) http_client: oauth2::reqwest::Client,
}

impl OAuth2Config {
    /// Client credentials against the Passport authorization server.
    ///
    /// # Errors
    ///
    /// Never fails in practice, the default endpoint is a valid URL.
    pub fn passport(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
    ) -> Result<OAuth2ConfigBuilder, OAuth2Error> {
        Self::client_credentials(client_id, client_secret, DEFAULT_TOKEN_URL)
    }

    /// Client credentials against a token endpoint.
    ///
    /// # Errors
    ///
    /// Fails if `token_url` is not a valid URL.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
        token_url: impl AsRef<str>,
    ) -> Result<OAuth2ConfigBuilder, OAuth2Error> {
        let token_url = token_url.as_ref();
        let token_url = Url::parse(token_url).map_err(|source| OAuth2Error::InvalidEndpoint {
            url: token_url.to_string(),
            source,
        })?;

        Ok(OAuth2ConfigBuilder::new(Grant::ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url,
        }))
    }

    /// Client credentials against an authorization host, whose token endpoint is
    /// `<host>/oauth/token`.
    ///
    /// # Errors
    ///
    /// Fails if the derived token endpoint is not a valid URL.
    pub fn client_credentials_for_host(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
        host: impl AsRef<str>,
    ) -> Result<OAuth2ConfigBuilder, OAuth2Error> {
        let token_url = format!("{}/oauth/token", host.as_ref().trim_end_matches('/'));
        Self::client_credentials(client_id, client_secret, token_url)
    }

    /// A token obtained elsewhere. It is never renewed.
    pub fn pre_acquired(access_token: impl Into<SecureString>) -> OAuth2ConfigBuilder {
        let mut builder = OAuth2ConfigBuilder::new(Grant::PreAcquired);
        builder.token = Some(OAuth2Token::new(access_token));
        builder
    }

    /// The client identifier, `None` for a pre-acquired token.
    pub fn client_id(&self) -> Option<&str> {
        match &self.grant {
            Grant::ClientCredentials { client_id, .. } => Some(client_id),
            Grant::PreAcquired => None,
        }
    }

    /// The token endpoint, `None` for a pre-acquired token.
    pub fn token_url(&self) -> Option<&Url> {
        match &self.grant {
            Grant::ClientCredentials { token_url, .. } => Some(token_url),
            Grant::PreAcquired => None,
        }
    }

    /// Requested scopes.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// The cached token, unless expired.
    pub async fn cached_token(&self) -> Option<OAuth2Token> {
        self.cache.current().await
    }

    /// Drops the cached token, the next call acquires a fresh one.
    pub async fn invalidate_token(&self) {
        self.cache.clear().await;
    }
}

impl fmt::Display for OAuth2Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.grant {
            Grant::ClientCredentials { client_id, .. } => {
                write!(f, "OAuth2 client credentials (client_id: {client_id})")
            }
            Grant::PreAcquired => write!(f, "OAuth2 pre-acquired token"),
        }
    }
}

/// Builder for [`OAuth2Config`].
#[derive(Debug, Clone)]
pub struct OAuth2ConfigBuilder {
    grant: Grant,
    scopes: Vec<String>,
    refresh_margin: Duration,
    token: Option<OAuth2Token>,
}

impl OAuth2ConfigBuilder {
    fn new(grant: Grant) -> Self {
        Self {
            grant,
            scopes: Vec::new(),
            refresh_margin: DEFAULT_REFRESH_MARGIN,
            token: None,
        }
    }

    /// Requests a scope.
    #[must_use]
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Requests several scopes.
    #[must_use]
    pub fn add_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Sets how long before expiry the token is renewed, 60 seconds by default.
    #[must_use]
    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    /// Sets the remaining lifetime of a pre-acquired token.
    ///
    /// Ignored for client credentials.
    #[must_use]
    pub fn expiring_in(mut self, lifetime: Duration) -> Self {
        self.token = self.token.map(|token| token.expiring_in(lifetime));
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client for token requests cannot be created.
    pub fn build(self) -> Result<OAuth2Config, OAuth2Error> {
        // Token requests never follow redirects.
        let http_client = oauth2::reqwest::ClientBuilder::new()
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| OAuth2Error::HttpClient {
                reason: err.to_string(),
            })?;

        let cache = self.token.map(TokenCache::holding).unwrap_or_default();

        Ok(OAuth2Config {
            grant: self.grant,
            scopes: self.scopes,
            refresh_margin: self.refresh_margin,
            cache,
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_target_passport_by_default() {
        let config = OAuth2Config::passport("client-id", "client-secret")
            .expect("valid endpoint")
            .build()
            .expect("valid config");

        assert_eq!(config.client_id(), Some("client-id"));
        assert_eq!(config.token_url().map(Url::as_str), Some(DEFAULT_TOKEN_URL));
        assert_eq!(config.refresh_margin, DEFAULT_REFRESH_MARGIN);
    }

    #[test]
    fn should_derive_token_url_from_host() {
        let config =
            OAuth2Config::client_credentials_for_host("id", "secret", "https://auth.example.com/")
                .expect("valid endpoint")
                .build()
                .expect("valid config");

        assert_eq!(
            config.token_url().map(Url::as_str),
            Some("https://auth.example.com/oauth/token")
        );
    }

    #[test]
    fn should_reject_invalid_token_url() {
        let result = OAuth2Config::client_credentials("client-id", "secret", "not-a-url");

        let Err(OAuth2Error::InvalidEndpoint { url, .. }) = result else {
            panic!("expected an invalid endpoint, got {result:?}");
        };
        assert_eq!(url, "not-a-url");
    }

    #[test]
    fn should_collect_scopes() {
        let config = OAuth2Config::passport("client-id", "secret")
            .expect("valid endpoint")
            .add_scope("openid")
            .add_scopes(["users:read", "users:write"])
            .with_refresh_margin(Duration::from_secs(120))
            .build()
            .expect("valid config");

        assert_eq!(config.scopes(), ["openid", "users:read", "users:write"]);
        assert_eq!(config.refresh_margin, Duration::from_secs(120));
    }

    #[test]
    fn should_redact_client_secret() {
        let config = OAuth2Config::passport("client-id", "super-secret")
            .expect("valid endpoint")
            .build()
            .expect("valid config");

        let debug = format!("{config:?}");

        assert!(debug.contains("client-id"));
        assert!(!debug.contains("super-secret"));
        assert_eq!(
            config.to_string(),
            "OAuth2 client credentials (client_id: client-id)"
        );
    }

    #[tokio::test]
    async fn should_seed_cache_with_pre_acquired_token() {
        let config = OAuth2Config::pre_acquired("my-token")
            .build()
            .expect("valid config");

        let token = config.cached_token().await.expect("seeded token");
        assert_eq!(token.access_token().as_str(), "my-token");
        assert_eq!(config.client_id(), None);

        config.invalidate_token().await;
        assert!(config.cached_token().await.is_none());
    }
}
