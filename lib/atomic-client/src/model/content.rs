//! Publishing: articles, assets, templates, audiences, distributions and publishers.

use bytes::Bytes;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{Metadata, id_input, required, required_id};
use crate::{ListParams, Validate, ValidationError};

// Articles

/// A published (or draft) article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Article {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub publisher_id: Option<Uuid>,
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub metadata: Option<Metadata>,
    pub published_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `article_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ArticleCreateInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

impl Validate for ArticleCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)
    }
}

/// Input of `article_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ArticleUpdateInput {
    #[serde(skip_serializing)]
    pub article_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

impl Validate for ArticleUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("article_id", &self.article_id)
    }
}

id_input! {
    /// Input of `article_get`.
    ArticleGetInput { article_id }
    /// Input of `article_delete`.
    ArticleDeleteInput { article_id }
}

/// Input of `article_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct ArticleListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Validate for ArticleListInput {}

// Assets

/// A stored file: image, document, media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Asset {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub filename: String,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub public: bool,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `asset_create`: the file content is uploaded as `multipart/form-data`.
///
/// The file itself never goes through serialization; the other fields travel in the
/// query string.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AssetCreateInput {
    pub filename: String,
    pub mime_type: String,
    #[debug(ignore)]
    #[serde(skip_serializing)]
    pub payload: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl Validate for AssetCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.payload.is_empty() {
            return Err(ValidationError::new("payload", "is required"));
        }
        required("filename", &self.filename)?;
        required("mime_type", &self.mime_type)
    }
}

/// Input of `asset_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct AssetUpdateInput {
    #[serde(skip_serializing)]
    pub asset_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for AssetUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("asset_id", &self.asset_id)
    }
}

id_input! {
    /// Input of `asset_get`.
    AssetGetInput { asset_id }
    /// Input of `asset_delete`.
    AssetDeleteInput { asset_id }
}

/// Input of `asset_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AssetListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl Validate for AssetListInput {}

// Templates

/// A message or page template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Template {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `template_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct TemplateCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for TemplateCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `template_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct TemplateUpdateInput {
    #[serde(skip_serializing)]
    pub template_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for TemplateUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("template_id", &self.template_id)
    }
}

id_input! {
    /// Input of `template_get`.
    TemplateGetInput { template_id }
    /// Input of `template_delete`.
    TemplateDeleteInput { template_id }
}

/// Input of `template_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct TemplateListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for TemplateListInput {}

// Audiences

/// A set of users, static or defined by a filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Audience {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub filter: Option<Value>,
    pub member_count: Option<u64>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `audience_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct AudienceCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for AudienceCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `audience_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct AudienceUpdateInput {
    #[serde(skip_serializing)]
    pub audience_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for AudienceUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("audience_id", &self.audience_id)
    }
}

id_input! {
    /// Input of `audience_get`.
    AudienceGetInput { audience_id }
    /// Input of `audience_delete`.
    AudienceDeleteInput { audience_id }
}

/// Input of `audience_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AudienceListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for AudienceListInput {}

// Distributions

/// A scheduled delivery of a template to an audience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Distribution {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub template_id: Option<Uuid>,
    pub audience_id: Option<Uuid>,
    pub article_id: Option<Uuid>,
    pub channel: Option<String>,
    pub status: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub sent_at: Option<Timestamp>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `distribution_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct DistributionCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for DistributionCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `distribution_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct DistributionUpdateInput {
    #[serde(skip_serializing)]
    pub distribution_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for DistributionUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("distribution_id", &self.distribution_id)
    }
}

id_input! {
    /// Input of `distribution_get`.
    DistributionGetInput { distribution_id }
    /// Input of `distribution_delete`.
    DistributionDeleteInput { distribution_id }
}

/// Input of `distribution_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct DistributionListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<Uuid>,
}

impl Validate for DistributionListInput {}

// Publishers

/// A publication: the brand articles are published under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Publisher {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// A page of publishers with the total count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherList {
    /// Publishers of the page.
    pub publishers: Vec<Publisher>,
    /// Number of publishers matching the query.
    pub total: u64,
}

/// Input of `publisher_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PublisherCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PublisherCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `publisher_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PublisherUpdateInput {
    #[serde(skip_serializing)]
    pub publisher_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PublisherUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("publisher_id", &self.publisher_id)
    }
}

id_input! {
    /// Input of `publisher_get`.
    PublisherGetInput { publisher_id }
    /// Input of `publisher_delete`.
    PublisherDeleteInput { publisher_id }
}

/// Input of `publisher_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PublisherListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for PublisherListInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MethodParams;

    #[test]
    fn should_send_asset_fields_but_not_file_in_query() {
        let input = AssetCreateInput {
            filename: "cover image.png".to_string(),
            mime_type: "image/png".to_string(),
            payload: Bytes::from_static(b"\x89PNG"),
            description: None,
            public: Some(true),
        };

        let query = input.to_query().expect("flat payload");

        insta::assert_snapshot!(query.encode().expect("encodable"), @"filename=cover+image.png&mime_type=image%2Fpng&public=true");
    }

    #[test]
    fn should_require_asset_payload_first() {
        let input = AssetCreateInput::default();

        let error = Validate::validate(&input).expect_err("empty asset");

        assert_eq!(error.field(), "payload");
    }

    #[test]
    fn should_flatten_pagination_into_list_query() {
        let input = ArticleListInput {
            page: ListParams::page(20, 40),
            status: Some("published".to_string()),
            tags: vec!["rust".to_string(), "news".to_string()],
            ..Default::default()
        };

        let query = input.to_query().expect("flat payload");

        insta::assert_snapshot!(query.encode().expect("encodable"), @"limit=20&offset=40&status=published&tags=rust&tags=news");
    }

    #[test]
    fn should_decode_publisher_list() {
        let list: PublisherList = serde_json::from_str(
            r#"{"publishers":[{"id":"6a1f0c2e-1b7d-4c55-8f0a-3e2d1c0b9a87","name":"Daily"}],"total":12}"#,
        )
        .expect("valid list");

        assert_eq!(list.total, 12);
        assert_eq!(list.publishers.len(), 1);
        assert_eq!(list.publishers.first().map(|p| p.name.as_str()), Some("Daily"));
    }
}
