use std::fmt;

use http::HeaderValue;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "oauth2")]
use super::oauth2::OAuth2Config;
use super::AtomicError;

/// Authentication-related errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// The bearer token cannot be used as a header value.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters.
        message: String,
    },

    /// The bearer token is empty.
    #[display("Bearer token is empty")]
    EmptyBearerToken,
}

/// A secret string, zeroed on drop.
///
/// `Debug` output is redacted. `Display` only shows the last four characters of long
/// secrets, enough to tell two API keys apart in logs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, derive_more::Debug)]
#[debug("SecureString([REDACTED])")]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Exposes the secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for an empty secret.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.chars().count();
        if count <= 8 {
            return f.write_str("****");
        }
        let suffix = self.0.chars().skip(count - 4).collect::<String>();
        write!(f, "****{suffix}")
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Credential used to authenticate calls.
///
/// Both variants end up as an `Authorization: Bearer <token>` header.
#[derive(Clone)]
pub enum Authentication {
    /// A static bearer token (API key or pre-acquired access token).
    Bearer(SecureString),

    /// OAuth2 client credentials, the token is acquired and cached on demand.
    #[cfg(feature = "oauth2")]
    OAuth2(OAuth2Config),
}

impl Authentication {
    /// Resolves the current bearer token.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or cannot be acquired.
    pub async fn bearer_token(&self) -> Result<SecureString, AtomicError> {
        let token = match self {
            Self::Bearer(token) => token.clone(),
            #[cfg(feature = "oauth2")]
            Self::OAuth2(config) => {
                let token = config.get_valid_token().await?;
                token.access_token().clone()
            }
        };
        if token.is_empty() {
            return Err(AuthenticationError::EmptyBearerToken.into());
        }
        Ok(token)
    }

    /// Builds the `Authorization` header value for a bearer token.
    ///
    /// # Errors
    ///
    /// Fails if the token contains characters not allowed in a header.
    pub fn bearer_header(token: &SecureString) -> Result<HeaderValue, AuthenticationError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(
            |err| AuthenticationError::InvalidBearerToken {
                message: err.to_string(),
            },
        )?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<SecureString> for Authentication {
    fn from(token: SecureString) -> Self {
        Self::Bearer(token)
    }
}

#[cfg(feature = "oauth2")]
impl From<OAuth2Config> for Authentication {
    fn from(config: OAuth2Config) -> Self {
        Self::OAuth2(config)
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            #[cfg(feature = "oauth2")]
            Self::OAuth2(config) => f.debug_tuple("OAuth2").field(config).finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => write!(f, "Bearer {token}"),
            #[cfg(feature = "oauth2")]
            Self::OAuth2(config) => write!(f, "{config}"),
        }
    }
}
