//! OAuth2 client-credentials authentication.
//!
//! Available with the `oauth2` feature (enabled by default). The token is acquired from the
//! token endpoint on first use, cached, and renewed shortly before it expires. A token
//! obtained elsewhere can be used as is with [`OAuth2Config::pre_acquired`].
//!
//! ```rust,no_run
//! use atomic_client::{AtomicClient, OAuth2Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let oauth2 = OAuth2Config::passport("client-id", "client-secret")?
//!     .add_scope("openid")
//!     .build()?;
//!
//! let client = AtomicClient::builder().with_oauth2(oauth2).build()?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod provider;
mod token;

pub use self::config::{DEFAULT_OAUTH_HOST, DEFAULT_TOKEN_URL, OAuth2Config, OAuth2ConfigBuilder};
pub use self::error::OAuth2Error;
pub use self::token::OAuth2Token;
