use oauth2::basic::BasicClient;
use oauth2::{AuthType, ClientId, ClientSecret, Scope, TokenResponse, TokenUrl};
use tracing::debug;
use url::Url;

use super::config::{Grant, OAuth2Config};
use super::error::OAuth2Error;
use super::token::OAuth2Token;
use crate::client::SecureString;

impl OAuth2Config {
    /// Returns the cached token, or acquires a new one when it is missing or about to expire.
    ///
    /// Concurrent callers wait for a single acquisition.
    ///
    /// # Errors
    ///
    /// See [`OAuth2Config::acquire_token`].
    pub async fn get_valid_token(&self) -> Result<OAuth2Token, OAuth2Error> {
        if let Some(token) = self.cache.fresh(self.refresh_margin).await {
            return Ok(token);
        }

        let _refresh = self.cache.refresh_lock().await;
        // renewed while waiting for the lock
        if let Some(token) = self.cache.fresh(self.refresh_margin).await {
            return Ok(token);
        }
        self.acquire_token().await
    }

    /// Acquires a new token, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Fails if the token endpoint cannot be reached or rejects the client,
    /// or if a pre-acquired token is no longer valid.
    pub async fn acquire_token(&self) -> Result<OAuth2Token, OAuth2Error> {
        match &self.grant {
            Grant::ClientCredentials {
                client_id,
                client_secret,
                token_url,
            } => {
                let token = self
                    .request_client_credentials(client_id, client_secret, token_url)
                    .await?;
                self.cache.store(token.clone()).await;
                Ok(token)
            }
            // Still usable, only inside the refresh margin.
            Grant::PreAcquired => self
                .cache
                .current()
                .await
                .ok_or(OAuth2Error::TokenUnavailable),
        }
    }

    async fn request_client_credentials(
        &self,
        client_id: &str,
        client_secret: &SecureString,
        token_url: &Url,
    ) -> Result<OAuth2Token, OAuth2Error> {
        let endpoint = TokenUrl::new(token_url.to_string()).map_err(|source| {
            OAuth2Error::InvalidEndpoint {
                url: token_url.to_string(),
                source,
            }
        })?;

        let client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.as_str().to_string()))
            .set_auth_type(AuthType::BasicAuth)
            .set_token_uri(endpoint);

        let request = self
            .scopes
            .iter()
            .fold(client.exchange_client_credentials(), |request, scope| {
                request.add_scope(Scope::new(scope.clone()))
            });

        debug!(%token_url, %client_id, "acquiring OAuth2 token");
        let response = request
            .request_async(&self.http_client)
            .await
            .map_err(|err| OAuth2Error::TokenRequest {
                token_url: token_url.to_string(),
                reason: err.to_string(),
            })?;

        let token = OAuth2Token::new(response.access_token().secret().as_str());
        let token = match response.expires_in() {
            Some(lifetime) => token.expiring_in(lifetime),
            None => token,
        };
        Ok(match response.scopes() {
            Some(scopes) => token.with_scopes(scopes.iter().map(|scope| scope.to_string())),
            None => token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn should_serve_pre_acquired_token() {
        let config = OAuth2Config::pre_acquired("pre-acquired")
            .build()
            .expect("valid config");

        let token = config.get_valid_token().await.expect("cached token");

        assert_eq!(token.access_token().as_str(), "pre-acquired");
    }

    #[tokio::test]
    async fn should_serve_pre_acquired_token_inside_refresh_margin() {
        let config = OAuth2Config::pre_acquired("short-lived")
            .expiring_in(Duration::from_secs(30))
            .build()
            .expect("valid config");

        let token = config.get_valid_token().await.expect("not yet expired");

        assert_eq!(token.access_token().as_str(), "short-lived");
    }

    #[tokio::test]
    async fn should_fail_once_pre_acquired_token_is_dropped() {
        let config = OAuth2Config::pre_acquired("token")
            .build()
            .expect("valid config");
        config.invalidate_token().await;

        let result = config.get_valid_token().await;

        assert_eq!(result.expect_err("no token"), OAuth2Error::TokenUnavailable);
    }
}
