//! # Atomic Client
//!
//! Async client for the Atomic (Passport) REST API.
//!
//! Every entity (users, articles, assets, plans, ...) exposes a small set of operations
//! that build a request from a typed input, send it and decode the response into a typed
//! entity. They all share the same pipeline:
//!
//! - the input validates itself, an invalid input never reaches the network
//! - the request is built: path identifiers, query string or JSON body, headers
//! - the request is sent with at most one exchange, nothing is retried
//! - the response is decoded, or turned into a structured [`ApiError`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use atomic_client::model::{UserGetInput, UserListInput};
//! use atomic_client::{AtomicClient, ListParams, RequestParams};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AtomicClient::builder()
//!     .with_bearer_token("api-key")
//!     .build()?;
//!
//! // Call-scoped settings: tenant, expansion, timeout, header overrides
//! let params = RequestParams::new()
//!     .with_instance("my-instance")
//!     .with_expand("roles");
//!
//! let users = client
//!     .user_list(&params, &UserListInput {
//!         page: ListParams::page(20, 0),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for user in &users {
//!     let user = client
//!         .user_get(&params, &UserGetInput { user_id: user.id })
//!         .await?;
//!     println!("{:?}", user.login);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! A static bearer token (API key) or, with the default `oauth2` feature, OAuth2 client
//! credentials:
//!
//! ```rust,no_run
//! # #[cfg(feature = "oauth2")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use atomic_client::{AtomicClient, OAuth2Config};
//!
//! let config = OAuth2Config::passport("client-id", "client-secret")?
//!     .add_scope("openid")
//!     .build()?;
//!
//! let client = AtomicClient::builder().with_oauth2(config).build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are cached and renewed before they expire. A `401 Unauthorized` drops the cached
//! token, so the next call acquires a fresh one.
//!
//! ## Lower level calls
//!
//! [`AtomicClient::get`], [`AtomicClient::post`], ... start an [`ApiCall`] on any path,
//! with any [`MethodParams`] payload. [`ApiCall::describe`] shows the request without
//! sending it.
//!
//! ## Errors
//!
//! Every failure is an [`AtomicError`], classified with [`AtomicError::kind`]:
//! validation, build, transport, API (status `>= 400`) or decode.
//!
//! ## Logging
//!
//! The crate logs with `tracing`: outbound requests and responses at `debug`, rejected
//! calls at `warn`. Credentials are redacted.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod api;
mod client;
pub mod model;

pub use self::client::*;
