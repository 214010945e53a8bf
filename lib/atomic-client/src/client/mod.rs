use http::Method;
use serde::de::DeserializeOwned;
use url::Url;

mod builder;
pub use self::builder::{AtomicClientBuilder, DEFAULT_API_HOST};

mod call;
pub use self::call::ApiCall;

mod parameters;
pub use self::parameters::{
    CallBody, CallHeaders, CallPath, CallQuery, ListParams, MethodParams, NoParams, RequestParams,
    Validate, ValidationError,
};

mod request;
pub use self::request::{ParamsEncoding, RequestDescriptor};

mod response;
pub use self::response::{LastResponse, Resource};

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

#[cfg(feature = "oauth2")]
pub mod oauth2;
#[cfg(feature = "oauth2")]
pub use self::oauth2::{OAuth2Config, OAuth2ConfigBuilder, OAuth2Error, OAuth2Token};

mod error;
pub use self::error::{ApiError, ApiErrorBody, AtomicError, ErrorKind};

/// Client for the Atomic REST API.
///
/// The client holds read-only settings (host, credential, default headers) and a
/// `reqwest::Client` connection pool. It is cheap to clone and safe to share between tasks.
///
/// Every operation performs at most one HTTP exchange; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use atomic_client::{AtomicClient, CallPath, NoParams, RequestParams};
///
/// # async fn example() -> Result<(), atomic_client::AtomicError> {
/// let client = AtomicClient::builder()
///     .with_bearer_token("api-key")
///     .build()?;
///
/// let widget = client
///     .get(CallPath::from("/api/1.0.0/widgets/{id}").add_param("id", "abc"))
///     .with_params(RequestParams::new().with_instance("tenant-1"))
///     .with_payload(&NoParams {})
///     .fetch::<serde_json::Value>()
///     .await?;
/// println!("{:?}", widget.value());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AtomicClient {
    client: reqwest::Client,
    base_url: Url,
    authentication: Option<Authentication>,
    default_headers: CallHeaders,
}

impl AtomicClient {
    /// Creates a builder, see [`AtomicClientBuilder`].
    pub fn builder() -> AtomicClientBuilder {
        AtomicClientBuilder::default()
    }

    /// The API host every path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured credential.
    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }
}

impl AtomicClient {
    /// Starts a call with an arbitrary method.
    pub fn call(&self, method: Method, path: impl Into<CallPath>) -> ApiCall<'static> {
        ApiCall::build(
            self.client.clone(),
            self.base_url.clone(),
            self.authentication.clone(),
            self.default_headers.clone(),
            method,
            path.into(),
        )
    }

    /// Starts a `GET` call, the payload goes to the query string.
    pub fn get(&self, path: impl Into<CallPath>) -> ApiCall<'static> {
        self.call(Method::GET, path)
    }

    /// Starts a `POST` call, the payload goes to a JSON body.
    pub fn post(&self, path: impl Into<CallPath>) -> ApiCall<'static> {
        self.call(Method::POST, path)
    }

    /// Starts a `PUT` call, the payload goes to a JSON body.
    pub fn put(&self, path: impl Into<CallPath>) -> ApiCall<'static> {
        self.call(Method::PUT, path)
    }

    /// Starts a `PATCH` call, the payload goes to a JSON body.
    pub fn patch(&self, path: impl Into<CallPath>) -> ApiCall<'static> {
        self.call(Method::PATCH, path)
    }

    /// Starts a `DELETE` call, the payload goes to the query string.
    pub fn delete(&self, path: impl Into<CallPath>) -> ApiCall<'static> {
        self.call(Method::DELETE, path)
    }
}

// Generic dispatch
impl AtomicClient {
    /// Runs one operation and decodes its response into `T`.
    ///
    /// Entity operations are thin wrappers around this method.
    ///
    /// # Errors
    ///
    /// See [`AtomicError`].
    pub async fn dispatch<T>(
        &self,
        method: Method,
        path: CallPath,
        params: &RequestParams,
        payload: &dyn MethodParams,
    ) -> Result<T, AtomicError>
    where
        T: DeserializeOwned + Default,
    {
        let resource = self
            .call(method, path)
            .with_params(params.clone())
            .with_payload(payload)
            .fetch::<T>()
            .await?;
        Ok(resource.into_value())
    }

    /// Runs one operation without decoding its response.
    ///
    /// # Errors
    ///
    /// See [`AtomicError`].
    pub async fn dispatch_void(
        &self,
        method: Method,
        path: CallPath,
        params: &RequestParams,
        payload: &dyn MethodParams,
    ) -> Result<(), AtomicError> {
        self.call(method, path)
            .with_params(params.clone())
            .with_payload(payload)
            .send()
            .await?;
        Ok(())
    }
}
