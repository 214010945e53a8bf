use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::ApiCall;
use crate::client::{ApiError, AtomicError, LastResponse, Resource, SecureString};

impl ApiCall<'_> {
    /// Executes the call and decodes the response body into `T`.
    ///
    /// An empty (or whitespace-only) body decodes to `T::default()`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use atomic_client::AtomicClient;
    ///
    /// # async fn example(client: AtomicClient) -> Result<(), atomic_client::AtomicError> {
    /// let widgets = client
    ///     .get("/api/1.0.0/widgets")
    ///     .fetch::<Vec<serde_json::Value>>()
    ///     .await?;
    /// assert!(widgets.last_response().status().is_success());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the payload fails its validation (nothing is sent)
    /// - the request cannot be built (missing identifier, invalid header, token acquisition)
    /// - the exchange fails (connection, timeout)
    /// - the service answers with a status `>= 400`
    /// - the body does not match `T`
    pub async fn fetch<T>(self) -> Result<Resource<T>, AtomicError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.exchange().await?;
        let value = response.decode::<T>()?;
        Ok(Resource::new(value, response))
    }

    /// Executes the call, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch), except for decoding.
    pub async fn send(self) -> Result<Resource<()>, AtomicError> {
        let response = self.exchange().await?;
        Ok(Resource::new((), response))
    }

    async fn exchange(self) -> Result<LastResponse, AtomicError> {
        if let Some(payload) = self.payload {
            payload.validate()?;
        }

        let bearer = self.resolve_bearer().await?;
        let descriptor = self.describe(bearer.as_ref())?;
        let request = descriptor.into_request(&self.base_url)?;

        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");

        let response = LastResponse::read(response).await?;
        if response.status().as_u16() < 400 {
            return Ok(response);
        }

        #[cfg(feature = "oauth2")]
        if response.status() == http::StatusCode::UNAUTHORIZED
            && let Some(crate::client::Authentication::OAuth2(config)) = &self.authentication
        {
            config.invalidate_token().await;
        }

        let error = ApiError::from_response(response)?;
        warn!(method = %self.method, path = %self.path, %error, "call rejected");
        Err(error.into())
    }

    async fn resolve_bearer(&self) -> Result<Option<SecureString>, AtomicError> {
        if self.params.is_auth_suppressed() {
            return Ok(None);
        }
        match &self.authentication {
            Some(authentication) => Ok(Some(authentication.bearer_token().await?)),
            None => Ok(None),
        }
    }
}
