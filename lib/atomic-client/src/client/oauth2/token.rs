use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::client::SecureString;

/// An access token issued by the authorization server.
///
/// The token value is a [`SecureString`]: redacted in `Debug`, zeroed on drop.
#[derive(Debug, Clone)]
pub struct OAuth2Token {
    access_token: SecureString,
    expires_at: Option<Instant>,
    scopes: Vec<String>,
}

impl OAuth2Token {
    /// A token without known expiry.
    pub fn new(access_token: impl Into<SecureString>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
            scopes: Vec::new(),
        }
    }

    /// Sets the lifetime reported by the token endpoint, counted from now.
    #[must_use]
    pub fn expiring_in(mut self, lifetime: Duration) -> Self {
        self.expires_at = Some(Instant::now() + lifetime);
        self
    }

    /// Records the granted scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// The bearer value.
    pub fn access_token(&self) -> &SecureString {
        &self.access_token
    }

    /// Granted scopes, empty when the token endpoint did not report them.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Tokens without expiry never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::ZERO)
    }

    /// Returns `true` if the token is expired, or expires within `margin`.
    pub fn expires_within(&self, margin: Duration) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() + margin >= expires_at)
    }
}

/// Token slot shared by every clone of a configuration.
///
/// Acquisitions go through [`TokenCache::refresh_lock`] so concurrent calls
/// hitting an expired token trigger a single token request.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenCache {
    slot: Arc<RwLock<Option<OAuth2Token>>>,
    refresh: Arc<Mutex<()>>,
}

impl TokenCache {
    pub(crate) fn holding(token: OAuth2Token) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token))),
            refresh: Arc::default(),
        }
    }

    /// The cached token, unless it expires within `margin`.
    pub(crate) async fn fresh(&self, margin: Duration) -> Option<OAuth2Token> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|token| !token.expires_within(margin))
            .cloned()
    }

    /// The cached token, unless expired.
    pub(crate) async fn current(&self) -> Option<OAuth2Token> {
        self.fresh(Duration::ZERO).await
    }

    pub(crate) async fn store(&self, token: OAuth2Token) {
        *self.slot.write().await = Some(token);
    }

    pub(crate) async fn clear(&self) {
        *self.slot.write().await = None;
    }

    pub(crate) async fn refresh_lock(&self) -> MutexGuard<'_, ()> {
        self.refresh.lock().await
    }
}
