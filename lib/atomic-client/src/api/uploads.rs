use http::Method;

use crate::model::{
    AccessToken, AccessTokenCreateInput, Asset, AssetCreateInput, Job, UserImportInput,
};
use crate::{AtomicClient, AtomicError, CallBody, ParamsEncoding, RequestParams, Validate};

/// Media type of user imports when none is given.
const DEFAULT_IMPORT_TYPE: &str = "text/csv";

impl AtomicClient {
    /// Uploads a file as a new asset.
    ///
    /// The file goes as a `multipart/form-data` part named `file`, the other fields of the
    /// input travel in the query string.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use atomic_client::model::AssetCreateInput;
    /// use atomic_client::{AtomicClient, RequestParams};
    ///
    /// # async fn example(client: AtomicClient) -> Result<(), atomic_client::AtomicError> {
    /// let input = AssetCreateInput {
    ///     filename: "cover.png".to_string(),
    ///     mime_type: "image/png".to_string(),
    ///     payload: std::fs::read("cover.png").unwrap_or_default().into(),
    ///     ..Default::default()
    /// };
    /// let asset = client.asset_create(&RequestParams::new(), &input).await?;
    /// println!("uploaded {}", asset.id);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// See [`AtomicError`].
    pub async fn asset_create(
        &self,
        params: &RequestParams,
        input: &AssetCreateInput,
    ) -> Result<Asset, AtomicError> {
        Validate::validate(input)?;
        let body = CallBody::multipart_file(&input.filename, &input.mime_type, &input.payload)?;

        let resource = self
            .post("/api/1.0.0/assets")
            .with_params(params.clone())
            .with_payload(input)
            .with_body(body)
            .with_encoding(ParamsEncoding::Query)
            .fetch::<Asset>()
            .await?;
        Ok(resource.into_value())
    }

    /// Imports users from a file, the import runs as a background [`Job`].
    ///
    /// # Errors
    ///
    /// See [`AtomicError`].
    pub async fn user_import(
        &self,
        params: &RequestParams,
        input: &UserImportInput,
    ) -> Result<Job, AtomicError> {
        Validate::validate(input)?;
        let mime_type = if input.mime_type.trim().is_empty() {
            DEFAULT_IMPORT_TYPE
        } else {
            input.mime_type.as_str()
        };
        let body = CallBody::multipart_file(&input.filename, mime_type, &input.payload)?;

        let resource = self
            .post("/api/1.0.0/users/import")
            .with_params(params.clone())
            .with_payload(input)
            .with_body(body)
            .with_encoding(ParamsEncoding::Query)
            .fetch::<Job>()
            .await?;
        Ok(resource.into_value())
    }

    /// Creates an access token for a user or an application.
    ///
    /// # Errors
    ///
    /// Fails with a validation error unless exactly one owner is set, see [`AtomicError`].
    pub async fn access_token_create(
        &self,
        params: &RequestParams,
        input: &AccessTokenCreateInput,
    ) -> Result<AccessToken, AtomicError> {
        Validate::validate(input)?;
        self.dispatch(Method::POST, input.owner_path(), params, input)
            .await
    }
}
