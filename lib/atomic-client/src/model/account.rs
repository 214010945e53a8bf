//! Identities: users, access tokens, applications and partners.

use bytes::Bytes;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, email, id_input, required, required_id};
use crate::{CallPath, ListParams, Validate, ValidationError};

// Users

/// A user of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct User {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub login: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<String>,
    pub email_verified: bool,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `user_create`.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct UserCreateInput {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[debug(ignore)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for UserCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("login", &self.login)?;
        if let Some(address) = &self.email {
            email("email", address)?;
        }
        Ok(())
    }
}

/// Input of `user_update`, only the fields set are changed.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct UserUpdateInput {
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[debug(ignore)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for UserUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("user_id", &self.user_id)?;
        if let Some(address) = &self.email {
            email("email", address)?;
        }
        Ok(())
    }
}

id_input! {
    /// Input of `user_get`.
    UserGetInput { user_id }
    /// Input of `user_delete`.
    UserDeleteInput { user_id }
}

/// Input of `user_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct UserListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Validate for UserListInput {}

/// Input of `user_import`: a CSV file of users, uploaded as `multipart/form-data`.
///
/// `filename`, `mime_type` and `payload` make the file part; the other fields travel
/// in the query string.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct UserImportInput {
    #[serde(skip_serializing)]
    pub filename: String,
    #[serde(skip_serializing)]
    pub mime_type: String,
    #[debug(ignore)]
    #[serde(skip_serializing)]
    pub payload: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_welcome: Option<bool>,
}

impl Validate for UserImportInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.payload.is_empty() {
            return Err(ValidationError::new("payload", "is required"));
        }
        required("filename", &self.filename)?;
        Ok(())
    }
}

// Access tokens

/// A token granting API access on behalf of a user or an application.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct AccessToken {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub application_id: Option<Uuid>,
    #[debug(ignore)]
    pub token: Option<String>,
    pub scope: Vec<String>,
    pub revoked: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `access_token_create`.
///
/// A token belongs to exactly one owner: set either `user_id` or `application_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AccessTokenCreateInput {
    #[serde(skip_serializing)]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing)]
    pub application_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
    /// Lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl AccessTokenCreateInput {
    /// Creation path of the token owner.
    pub(crate) fn owner_path(&self) -> CallPath {
        match (self.user_id, self.application_id) {
            (Some(user_id), _) => {
                CallPath::from("/api/1.0.0/users/{user_id}/tokens").add_param("user_id", user_id)
            }
            (None, Some(application_id)) => {
                CallPath::from("/api/1.0.0/applications/{application_id}/tokens")
                    .add_param("application_id", application_id)
            }
            // Rejected by validation before any path is built.
            (None, None) => CallPath::from("/api/1.0.0/users/{user_id}/tokens"),
        }
    }
}

impl Validate for AccessTokenCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        match (self.user_id, self.application_id) {
            (Some(_), Some(_)) => Err(ValidationError::new(
                "user_id",
                "only one of user_id or application_id is allowed",
            )),
            (Some(id), None) => required_id("user_id", &id),
            (None, Some(id)) => required_id("application_id", &id),
            (None, None) => Err(ValidationError::new(
                "user_id",
                "user_id or application_id is required",
            )),
        }
    }
}

id_input! {
    /// Input of `access_token_get`.
    AccessTokenGetInput { access_token_id }
    /// Input of `access_token_revoke`.
    AccessTokenRevokeInput { access_token_id }
    /// Input of `access_token_delete`.
    AccessTokenDeleteInput { access_token_id }
}

// Applications

/// A registered OAuth2 application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Application {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub client_id: Option<String>,
    pub allowed_grants: Vec<String>,
    pub redirect_uris: Vec<String>,
    pub permissions: Vec<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `application_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ApplicationCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_grants: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for ApplicationCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `application_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ApplicationUpdateInput {
    #[serde(skip_serializing)]
    pub application_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_grants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for ApplicationUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("application_id", &self.application_id)
    }
}

id_input! {
    /// Input of `application_get`.
    ApplicationGetInput { application_id }
    /// Input of `application_delete`.
    ApplicationDeleteInput { application_id }
}

/// Input of `application_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct ApplicationListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for ApplicationListInput {}

// Partners

/// A partner organization, with its own credentials and tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub contact_email: Option<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `partner_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PartnerCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        if let Some(address) = &self.contact_email {
            email("contact_email", address)?;
        }
        Ok(())
    }
}

/// Input of `partner_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerUpdateInput {
    #[serde(skip_serializing)]
    pub partner_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PartnerUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("partner_id", &self.partner_id)?;
        if let Some(address) = &self.contact_email {
            email("contact_email", address)?;
        }
        Ok(())
    }
}

id_input! {
    /// Input of `partner_get`.
    PartnerGetInput { partner_id }
    /// Input of `partner_delete`.
    PartnerDeleteInput { partner_id }
}

/// Input of `partner_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for PartnerListInput {}

/// Client credentials issued to a partner.
///
/// The secret is only returned on creation.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct PartnerCredential {
    pub partner_id: Uuid,
    pub client_id: String,
    #[debug(ignore)]
    pub client_secret: Option<String>,
    pub scopes: Vec<String>,
    pub expires_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `partner_credential_create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerCredentialCreateInput {
    #[serde(skip_serializing)]
    pub partner_id: Uuid,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl Validate for PartnerCredentialCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("partner_id", &self.partner_id)
    }
}

/// Input of `partner_credential_get` and `partner_credential_delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerCredentialInput {
    #[serde(skip_serializing)]
    pub partner_id: Uuid,
    #[serde(skip_serializing)]
    pub client_id: String,
}

impl Validate for PartnerCredentialInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("partner_id", &self.partner_id)?;
        required("client_id", &self.client_id)
    }
}

/// An access token issued to a partner.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct PartnerAccessToken {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub client_id: Option<String>,
    #[debug(ignore)]
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub scopes: Vec<String>,
    pub expires_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `partner_token_create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PartnerTokenCreateInput {
    #[serde(skip_serializing)]
    pub partner_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl Validate for PartnerTokenCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("partner_id", &self.partner_id)
    }
}

id_input! {
    /// Input of `partner_token_get` and `partner_token_revoke`.
    PartnerTokenInput { partner_id, token_id }
}
